// src/core/net.rs
//
// HTTP GET through a shared blocking agent. Every request carries a global
// timeout so a stalled fetch fails outward instead of hanging the run.

use std::time::Duration;

use ureq::Agent;

use crate::config::consts::REQUEST_TIMEOUT_SECS;

pub fn agent() -> Agent {
    Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .build()
        .new_agent()
}

/// Fetch `url` and return the response body. Non-2xx statuses are errors.
pub fn http_get(agent: &Agent, url: &str) -> Result<String, ureq::Error> {
    let mut response = agent.get(url).call()?;
    response.body_mut().read_to_string()
}
