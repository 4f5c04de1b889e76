//! Analysis provider seam.
//!
//! The UI never talks to an AI backend directly; it goes through
//! [`LocalAnalysisProvider`] (and its `Send` variant [`AnalysisProvider`]),
//! so the shipping mock can be swapped for a real inference client without
//! touching any screen code.

use std::time::Duration;

use rand::seq::SliceRandom;

use mentor_core::prelude::*;

/// What the user asked the mentor to do with their code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnalysisKind {
    #[default]
    Review,
    Debug,
    Explain,
}

impl AnalysisKind {
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisKind::Review => "Review",
            AnalysisKind::Debug => "Debug",
            AnalysisKind::Explain => "Explain",
        }
    }
}

/// A single analysis request.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub kind: AnalysisKind,
    pub input: String,
}

/// Structured reply from the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReply {
    pub text: String,
    /// Whether the reply embeds a code snippet (affects rendering).
    pub has_code: bool,
}

/// Submit code, receive a structured result.
#[trait_variant::make(AnalysisProvider: Send)]
pub trait LocalAnalysisProvider {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReply>;
}

/// Canned replies, verbatim product copy from the mock backend.
const CANNED_REPLIES: [&str; 3] = [
    "Looking at your code, I notice a few optimization opportunities. The recursive Fibonacci function has exponential time complexity. Consider using dynamic programming:\n\n```javascript\nfunction fibonacci(n, memo = {}) {\n  if (n in memo) return memo[n];\n  if (n <= 2) return 1;\n  memo[n] = fibonacci(n - 1, memo) + fibonacci(n - 2, memo);\n  return memo[n];\n}\n```\n\nThis reduces the time complexity from O(2^n) to O(n).",
    "I can help you debug this error. The TypeError suggests you're trying to access the 'length' property on an undefined value. Here are some steps to fix it:\n\n1. Add null checks before accessing properties\n2. Use optional chaining (?.)\n3. Validate input parameters\n\nWould you like me to examine the specific code causing this issue?",
    "Great question! Let me explain this code pattern step by step:\n\n1. This uses a closure to maintain state\n2. The inner function has access to the outer function's variables\n3. Each call creates a new execution context\n\nThis is commonly used for creating private variables in JavaScript. Would you like me to show you more examples?",
];

/// Mock provider: a fixed "thinking" delay, then a canned reply.
#[derive(Debug, Clone)]
pub struct MockProvider {
    delay: Duration,
    /// Pins the reply index instead of picking randomly. Test hook.
    fixed_reply: Option<usize>,
}

impl MockProvider {
    /// Standard mock: 1.5s delay, random canned reply.
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(1500),
            fixed_reply: None,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            fixed_reply: None,
        }
    }

    /// Deterministic variant for tests: no delay, fixed reply.
    pub fn deterministic(reply_index: usize) -> Self {
        Self {
            delay: Duration::ZERO,
            fixed_reply: Some(reply_index % CANNED_REPLIES.len()),
        }
    }

    fn pick_reply(&self) -> &'static str {
        match self.fixed_reply {
            Some(idx) => CANNED_REPLIES[idx],
            None => CANNED_REPLIES
                .choose(&mut rand::thread_rng())
                .copied()
                .unwrap_or(CANNED_REPLIES[0]),
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalAnalysisProvider for MockProvider {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReply> {
        debug!(kind = ?request.kind, bytes = request.input.len(), "mock analysis requested");
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let text = self.pick_reply().to_string();
        // Mirrors the original heuristic: mentioning code/function gets a
        // snippet-bearing reply rendering.
        let has_code = text.contains("```")
            || request.input.to_lowercase().contains("code")
            || request.input.to_lowercase().contains("function");
        Ok(AnalysisReply { text, has_code })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deterministic_reply() {
        let provider = MockProvider::deterministic(1);
        let reply = provider
            .analyze(AnalysisRequest {
                kind: AnalysisKind::Debug,
                input: "TypeError: boom".to_string(),
            })
            .await
            .unwrap();
        assert!(reply.text.contains("debug this error"));
    }

    #[tokio::test]
    async fn test_code_heuristic() {
        let provider = MockProvider::deterministic(1);
        let reply = provider
            .analyze(AnalysisRequest {
                kind: AnalysisKind::Review,
                input: "please review this function".to_string(),
            })
            .await
            .unwrap();
        assert!(reply.has_code);
    }

    #[tokio::test]
    async fn test_random_reply_is_canned() {
        let provider = MockProvider::with_delay(Duration::ZERO);
        let reply = provider
            .analyze(AnalysisRequest {
                kind: AnalysisKind::Explain,
                input: "what is this".to_string(),
            })
            .await
            .unwrap();
        assert!(CANNED_REPLIES.contains(&reply.text.as_str()));
    }
}
