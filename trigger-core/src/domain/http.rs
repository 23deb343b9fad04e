//! HTTP trigger domain model
//!
//! The HTTP samples register a fixed set of functions. Each one accepts any
//! request and answers with a constant plain-text body.

/// An HTTP-triggered function with a fixed response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTrigger {
    /// Function name, also the last route segment
    pub name: &'static str,

    /// Full route path the function is served on
    pub route: &'static str,

    /// Response body returned for every request
    pub body: &'static str,
}

/// Every HTTP trigger the host registers, in registration order
pub static HTTP_TRIGGERS: [HttpTrigger; 2] = [
    HttpTrigger {
        name: "http_trigger",
        route: "/api/http_trigger",
        body: "This HTTP triggered function executed successfully.",
    },
    HttpTrigger {
        name: "http_trigger_blueprint",
        route: "/api/http_trigger_blueprint",
        body: "This HTTP triggered function from a blueprint executed successfully.",
    },
];

/// Looks up a trigger by function name
pub fn find_trigger(name: &str) -> Option<&'static HttpTrigger> {
    HTTP_TRIGGERS.iter().find(|trigger| trigger.name == name)
}

impl std::fmt::Display for HttpTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.route)
    }
}
