//! The narrated demo sequence.
//!
//! [`Narrator`] writes the whole showcase onto any [`Write`] sink: banner,
//! session grants, feature blocks, the live operations simulation, analytics,
//! the comparison table and the closing summary. Nothing here talks to a real
//! service; every figure is a literal.

mod blocks;

use crate::config::DemoConfig;
use crate::error::{DemoError, Result};
use crate::operation::OperationKind;
use crate::session::SessionService;
use colored::Colorize;
use std::future::Future;
use std::io::Write;
use std::sync::Arc;
use strum::IntoEnumIterator;

pub struct Narrator<W: Write> {
    config: DemoConfig,
    sessions: Arc<dyn SessionService>,
    out: W,
}

impl<W: Write> Narrator<W> {
    pub fn new(config: DemoConfig, sessions: Arc<dyn SessionService>, out: W) -> Self {
        Self {
            config,
            sessions,
            out,
        }
    }

    /// Prints the introductory lines shown before the demo starts.
    pub fn intro(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "{}",
            format!("🤖 {} - Integration Demo", self.config.display_name()).bold()
        )?;
        writeln!(self.out, "   Simulating ultra-fast Rust core + AI brain\n")?;
        Ok(())
    }

    /// Prints the intro and runs the full sequence, stopping early with
    /// [`DemoError::Interrupted`] if `interrupt` completes first.
    ///
    /// The interrupt is polled before any output, so one that has already
    /// fired suppresses the whole transcript.
    pub async fn run_guarded<F>(&mut self, interrupt: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            _ = interrupt => {
                tracing::debug!("Interrupt received, abandoning demo");
                Err(DemoError::Interrupted)
            }
            result = self.intro_then_run() => result,
        }
    }

    async fn intro_then_run(&mut self) -> Result<()> {
        self.intro()?;
        self.run().await
    }

    /// Runs the full sequence from banner to closing summary.
    pub async fn run(&mut self) -> Result<()> {
        self.banner()?;

        tracing::debug!("Creating demo sessions");
        writeln!(self.out, "\n🎯 Creating demo sessions...")?;
        for tier in ["demo", "showcase", "enterprise"] {
            self.create_session(tier).await?;
        }

        self.bullet_block("⚡ Performance Benchmarks (vs traditional tools):", blocks::BENCHMARKS)?;
        self.bullet_block("🧠 AI-Powered Features:", blocks::AI_FEATURES)?;
        self.bullet_block("🛡️ Security & Protection:", blocks::SECURITY_FEATURES)?;

        self.simulate_operations().await?;

        tracing::debug!("Showing analytics and comparison");
        self.heading("📊 Real-Time Analytics Dashboard")?;
        writeln!(self.out, "{}", blocks::ANALYTICS)?;
        self.heading("🏆 Competitive Advantage")?;
        writeln!(self.out, "{}", blocks::COMPARISON)?;

        self.closing()
    }

    /// Prints the banner and the agent start-up lines.
    pub fn banner(&mut self) -> Result<()> {
        let name = self.config.display_name();
        let rule = "=".repeat(blocks::RULE_WIDTH);

        writeln!(self.out, "{}", rule)?;
        writeln!(
            self.out,
            "{}",
            format!("🚀 {} - Ultra-Fast Automation Demo", name).bright_cyan().bold()
        )?;
        writeln!(self.out, "{}", rule)?;

        writeln!(self.out, "🤖 {} initialized", name)?;
        writeln!(self.out, "   ⚡ Rust core loaded")?;
        writeln!(self.out, "   🧠 AI brain ready")?;
        writeln!(self.out, "   🔒 Security layer active")?;
        Ok(())
    }

    /// Grants a session for `tier` and prints its confirmation.
    ///
    /// The confirmation names the tier as requested; an unknown label is
    /// granted (and shows) the demo limits. Returns the new session id.
    pub async fn create_session(&mut self, tier: &str) -> Result<String> {
        let record = self.sessions.create_session(tier).await;

        writeln!(
            self.out,
            "{}",
            format!(
                "✅ {} session created: {}...",
                title_case(tier),
                record.short_id()
            )
            .green()
        )?;
        writeln!(
            self.out,
            "   📊 Limits: {} ops, {} repos, {}",
            record.operation_limit, record.repo_limit, record.duration_label
        )?;

        Ok(record.id)
    }

    /// Plays the four live operations, each followed by its result block.
    pub async fn simulate_operations(&mut self) -> Result<()> {
        self.heading("🎪 Live Operations Simulation")?;

        for kind in OperationKind::iter() {
            tracing::debug!(operation = %kind, repo = kind.target(), "Simulating operation");

            writeln!(self.out, "\n{}: {}", kind.label().bold(), kind.target())?;
            writeln!(self.out, "   {}", kind.status())?;
            self.out.flush()?;

            tokio::time::sleep(self.config.operation_delay).await;

            for line in kind.result_lines() {
                writeln!(self.out, "   {}", line)?;
            }
        }

        Ok(())
    }

    fn closing(&mut self) -> Result<()> {
        self.heading("🎉 Demo Complete!")?;

        self.bullet_block("💎 Key Takeaways:", blocks::TAKEAWAYS)?;
        self.bullet_block("📞 Next Steps:", blocks::NEXT_STEPS)?;
        writeln!(self.out, "   🔹 Contact: {}", self.config.contact_email)?;
        self.out.flush()?;
        Ok(())
    }

    fn heading(&mut self, title: &str) -> Result<()> {
        let rule = "=".repeat(blocks::RULE_WIDTH);
        writeln!(self.out, "\n{}", rule)?;
        writeln!(self.out, "{}", title.bright_cyan().bold())?;
        writeln!(self.out, "{}", rule)?;
        Ok(())
    }

    fn bullet_block(&mut self, title: &str, lines: &[&str]) -> Result<()> {
        writeln!(self.out, "\n{}", title)?;
        for line in lines {
            writeln!(self.out, "   {}", line)?;
        }
        Ok(())
    }
}

/// Runs the whole demo onto `out` and reports how it ended on the same sink.
///
/// Failures never escape as a panic or exit code; the returned result is only
/// informational.
pub async fn run_demo<W, F>(
    config: DemoConfig,
    sessions: Arc<dyn SessionService>,
    mut out: W,
    interrupt: F,
) -> Result<()>
where
    W: Write,
    F: Future<Output = ()>,
{
    let result = Narrator::new(config, sessions, &mut out)
        .run_guarded(interrupt)
        .await;

    if let Err(e) = &result {
        tracing::debug!(interrupted = e.is_interrupted(), "Demo ended early: {}", e);
    }
    if let Err(e) = report_outcome(&result, &mut out).and_then(|()| out.flush()) {
        tracing::warn!("Failed to report demo outcome: {}", e);
    }

    result
}

/// Capitalizes the first letter of every word and lowercases the rest.
///
/// Any non-alphabetic character starts a new word ("platinum-plus" becomes
/// "Platinum-Plus").
fn title_case(label: &str) -> String {
    let mut titled = String::with_capacity(label.len());
    let mut in_word = false;
    for c in label.chars() {
        if c.is_alphabetic() {
            if in_word {
                titled.extend(c.to_lowercase());
            } else {
                titled.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            titled.push(c);
            in_word = false;
        }
    }
    titled
}

/// Prints how the demo ended.
///
/// A successful run prints nothing; an interrupt and any other failure each
/// get their own message.
pub fn report_outcome<W: Write>(result: &Result<()>, out: &mut W) -> std::io::Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(DemoError::Interrupted) => {
            writeln!(out, "\n\n{}", "⏹️  Demo interrupted by user".yellow())
        }
        Err(e) => writeln!(out, "\n{}", format!("❌ Demo error: {}", e).red()),
    }
}
