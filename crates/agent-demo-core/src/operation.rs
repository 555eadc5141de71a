//! Catalogue of simulated live operations.
//!
//! Each kind carries its own header, target, status line and literal result
//! block. [`OperationKind::iter`] yields them in presentation order.

use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum OperationKind {
    SmartCommit,
    HealthCheck,
    MultiRepoSync,
    AiOptimization,
}

impl OperationKind {
    pub fn label(&self) -> &'static str {
        match self {
            OperationKind::SmartCommit => "🤖 Smart Commit",
            OperationKind::HealthCheck => "📊 Repo Health Check",
            OperationKind::MultiRepoSync => "🔄 Multi-Repo Sync",
            OperationKind::AiOptimization => "🎯 AI Optimization",
        }
    }

    /// Repository (or repository pattern) the operation runs against.
    pub fn target(&self) -> &'static str {
        match self {
            OperationKind::SmartCommit => "my-repo",
            OperationKind::HealthCheck => "enterprise-app",
            OperationKind::MultiRepoSync => "microservice-*",
            OperationKind::AiOptimization => "web-dashboard",
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            OperationKind::SmartCommit => "Analyzing code patterns...",
            OperationKind::HealthCheck => "Running deep analysis...",
            OperationKind::MultiRepoSync => "Parallel sync initiated...",
            OperationKind::AiOptimization => "Generating suggestions...",
        }
    }

    /// Lines printed once the simulated processing finishes.
    pub fn result_lines(&self) -> &'static [&'static str] {
        match self {
            OperationKind::SmartCommit => &[
                "✅ feat(auth): implement JWT middleware with rate limiting",
                "📊 AI Confidence: 94% | Files: 3 | +47 -12 lines",
            ],
            OperationKind::HealthCheck => &[
                "📊 Health Score: 87/100",
                "⚠️  Predicted Issues: Test coverage will drop in ~2 weeks",
                "💡 AI Recommendation: Add integration tests for auth module",
            ],
            OperationKind::MultiRepoSync => &["✅ 12 repos synced in 1.2s (avg 98ms/repo)"],
            OperationKind::AiOptimization => &[
                "🧠 5 optimization suggestions generated",
                "⚡ Performance improvement: +23%",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_presentation_order() {
        let kinds: Vec<_> = OperationKind::iter().collect();
        assert_eq!(
            kinds,
            vec![
                OperationKind::SmartCommit,
                OperationKind::HealthCheck,
                OperationKind::MultiRepoSync,
                OperationKind::AiOptimization,
            ]
        );
    }

    #[test]
    fn test_labels_keep_their_keywords() {
        assert!(OperationKind::SmartCommit.label().contains("Smart Commit"));
        assert!(OperationKind::HealthCheck.label().contains("Health Check"));
        assert!(OperationKind::MultiRepoSync.label().contains("Multi-Repo"));
        assert!(OperationKind::AiOptimization.label().contains("AI Optimization"));
    }

    #[test]
    fn test_each_kind_has_its_own_result() {
        let commit = OperationKind::SmartCommit.result_lines();
        assert!(commit[0].contains("feat(auth)"));
        assert!(commit.iter().all(|line| !line.contains("Health Score")));

        assert!(OperationKind::HealthCheck.result_lines()[0].contains("Health Score: 87/100"));
        assert_eq!(OperationKind::MultiRepoSync.result_lines().len(), 1);
        assert!(OperationKind::AiOptimization.result_lines()[1].contains("+23%"));
    }

    #[test]
    fn test_slug() {
        assert_eq!(OperationKind::SmartCommit.to_string(), "smart-commit");
        assert_eq!(OperationKind::MultiRepoSync.to_string(), "multi-repo-sync");
    }
}
