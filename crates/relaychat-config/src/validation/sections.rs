//! Per-section validation: server, upstream, and client.

use crate::schema::RelayChatConfig;

use super::helpers::{validate_http_url, validate_non_empty, validate_range};

pub(crate) fn validate_server(errors: &mut Vec<String>, config: &RelayChatConfig) {
    validate_non_empty(errors, "server.host", &config.server.host);
    validate_range(errors, "server.port", config.server.port, 1, 65535);
}

pub(crate) fn validate_upstream(errors: &mut Vec<String>, config: &RelayChatConfig) {
    validate_http_url(errors, "upstream.base_url", &config.upstream.base_url);
    validate_non_empty(errors, "upstream.model", &config.upstream.model);
    validate_range(
        errors,
        "upstream.connect_timeout_secs",
        config.upstream.connect_timeout_secs,
        1,
        60,
    );
    validate_range(
        errors,
        "upstream.request_timeout_secs",
        config.upstream.request_timeout_secs,
        1,
        600,
    );
}

pub(crate) fn validate_client(errors: &mut Vec<String>, config: &RelayChatConfig) {
    validate_http_url(errors, "client.relay_url", &config.client.relay_url);
}
