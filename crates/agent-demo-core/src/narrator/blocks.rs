//! Literal text blocks printed by the narrator.

pub const RULE_WIDTH: usize = 60;

pub const BENCHMARKS: &[&str] = &[
    "🔹 Git Operations: 10x faster",
    "🔹 API Calls: 5x more efficient",
    "🔹 Memory Usage: 70% lower",
    "🔹 Startup Time: 15x faster",
];

pub const AI_FEATURES: &[&str] = &[
    "🔹 Smart commit message generation",
    "🔹 Code pattern recognition",
    "🔹 Predictive repo health analysis",
    "🔹 Optimal contribution timing",
];

pub const SECURITY_FEATURES: &[&str] = &[
    "🔹 Session-based rate limiting",
    "🔹 Watermarked outputs",
    "🔹 Anti-debugging protection",
    "🔹 Telemetry collection",
];

pub const ANALYTICS: &str = "
╭─────────────────────────────────────╮
│ Agent Performance Statistics        │
├─────────────────────────────────────┤
│ Total Operations    │ 1,247         │
│ Success Rate        │ 99.2%         │
│ Avg Duration        │ 145ms         │
│ Memory Usage        │ 12.4MB        │
│ Active Sessions     │ 3             │
╰─────────────────────────────────────╯

🚀 Top Operations by Speed:
  • smart-commit:     89ms avg
  • repo-analysis:   156ms avg
  • health-check:    234ms avg

🎯 Session Breakdown:
  • Demo sessions:      15 active
  • Showcase sessions:   4 active
  • Enterprise trials:   2 active
";

pub const COMPARISON: &str = "
| Feature           | Agent v2.0 | GitHub CLI | GitKraken | Others   |
|-------------------|------------|------------|-----------|----------|
| Performance       | 🟢 10x     | 🟡 1x      | 🟡 1x     | 🔴 0.5x  |
| AI Integration    | 🟢 Advanced| ❌ None    | ❌ None   | 🟡 Basic |
| Multi-repo Ops    | 🟢 Parallel| 🟡 Serial  | 🟡 Manual | 🟡 Limited|
| Predictive        | 🟢 ML      | ❌ None    | ❌ None   | ❌ None  |
| Enterprise Ready  | 🟢 Yes     | 🟡 Limited | 🟢 Yes    | 🟡 Varies|
";

pub const TAKEAWAYS: &[&str] = &[
    "🔹 10x performance improvement over traditional tools",
    "🔹 AI-powered automation saves hours of manual work",
    "🔹 Enterprise-grade security and session management",
    "🔹 Proprietary technology advantage",
];

pub const NEXT_STEPS: &[&str] = &[
    "🔹 Request showcase session (2 hours)",
    "🔹 Schedule enterprise trial (7 days)",
];
