use std::fmt;

/// Identifies one dispatched request; only the latest one may update state
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic source of request tokens
#[derive(Debug, Default, Clone)]
pub struct RequestSequence {
    issued: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new token, superseding every earlier one
    pub fn next_token(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_increase() {
        let mut sequence = RequestSequence::new();
        let first = sequence.next_token();
        let second = sequence.next_token();

        assert!(second > first);
    }

    #[test]
    fn test_only_latest_token_is_current() {
        let mut sequence = RequestSequence::new();
        let first = sequence.next_token();
        assert!(sequence.is_current(first));

        let second = sequence.next_token();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }
}
