/// Identity token for one issued lookup request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Tracks the newest in-flight lookup for a single form field.
///
/// Lookups are blur-triggered and never cancelled, so a slow response can
/// arrive after the field changed and a newer request went out. Responses
/// are applied only when their token is still the latest issued.
#[derive(Debug, Default, Clone)]
pub struct LookupSequence {
    issued: u64,
    pending: bool,
}

impl LookupSequence {
    /// Issues a token for a new request, superseding all earlier ones.
    pub fn begin(&mut self) -> RequestToken {
        self.issued += 1;
        self.pending = true;
        RequestToken(self.issued)
    }

    /// True while the latest request has not completed.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Accepts a response. Returns true only for the latest token; a stale
    /// token is rejected and leaves the pending flag untouched.
    pub fn accept(&mut self, token: RequestToken) -> bool {
        if token.0 == self.issued {
            self.pending = false;
            true
        } else {
            false
        }
    }
}

/// Advisory outcome of an autofill lookup, projected into step feedback.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupFeedback {
    Found,
    NotFound,
    OutOfCoverage(String),
    Failed(String),
}
