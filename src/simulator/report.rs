//! Simulation report generation.

use crate::core::tick::CrashCause;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of a single simulated run.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub score: u32,
    pub ticks: u64,
    /// `None` if the run hit the tick limit.
    pub crash: Option<CrashCause>,
    pub final_speed: f64,
    pub final_spawn_interval: u32,
    pub warnings: u32,
}

impl RunStats {
    pub fn timed_out(&self) -> bool {
        self.crash.is_none()
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_timed_out: u32,
    pub avg_score: f64,
    pub max_score: u32,
    pub avg_ticks: f64,
    pub avg_warnings: f64,
    pub max_speed_reached: f64,
    pub min_spawn_interval_reached: u32,
    pub crash_causes: BTreeMap<String, u32>,
    pub score_distribution: BTreeMap<u32, u32>,
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;

        let mut crash_causes = BTreeMap::new();
        let mut score_distribution = BTreeMap::new();
        for run in &runs {
            let cause = match run.crash {
                Some(cause) => format!("{:?}", cause),
                None => "TimedOut".to_string(),
            };
            *crash_causes.entry(cause).or_insert(0) += 1;
            // Bucketed by difficulty level (5 points each)
            *score_distribution.entry(run.score / 5 * 5).or_insert(0) += 1;
        }

        Self {
            num_runs,
            runs_timed_out: runs.iter().filter(|r| r.timed_out()).count() as u32,
            avg_score: runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor,
            max_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
            avg_ticks: runs.iter().map(|r| r.ticks as f64).sum::<f64>() / divisor,
            avg_warnings: runs.iter().map(|r| r.warnings as f64).sum::<f64>() / divisor,
            max_speed_reached: runs.iter().map(|r| r.final_speed).fold(0.0, f64::max),
            min_spawn_interval_reached: runs
                .iter()
                .map(|r| r.final_spawn_interval)
                .min()
                .unwrap_or(0),
            crash_causes,
            score_distribution,
            run_stats: runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} timed out\n\n",
            self.num_runs, self.runs_timed_out
        ));

        report.push_str("── SCORING ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:           {:.1}\n", self.avg_score));
        report.push_str(&format!("  Best Score:          {}\n", self.max_score));
        report.push_str(&format!("  Avg Ticks Survived:  {:.0}\n", self.avg_ticks));
        report.push_str(&format!("  Avg Warnings:        {:.1}\n\n", self.avg_warnings));

        report.push_str("── DIFFICULTY ───────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Top Speed Reached:   {:.1}\n",
            self.max_speed_reached
        ));
        report.push_str(&format!(
            "  Tightest Interval:   {} ticks\n\n",
            self.min_spawn_interval_reached
        ));

        report.push_str("── CRASH CAUSES ─────────────────────────────────────────────────\n");
        for (cause, count) in &self.crash_causes {
            let pct = *count as f64 / self.num_runs.max(1) as f64 * 100.0;
            let bar = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:<10} {:>5.1}% {}\n", cause, pct, bar));
        }
        report.push('\n');

        report.push_str("── SCORE DISTRIBUTION ───────────────────────────────────────────\n");
        for (bucket, count) in &self.score_distribution {
            let pct = *count as f64 / self.num_runs.max(1) as f64 * 100.0;
            let bar = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!(
                "  {:>3}-{:<3} {:>5.1}% {}\n",
                bucket,
                bucket + 4,
                pct,
                bar
            ));
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(score: u32, crash: Option<CrashCause>) -> RunStats {
        RunStats {
            score,
            ticks: 100 * score as u64,
            crash,
            final_speed: 3.0 + score as f64,
            final_spawn_interval: 145 - score,
            warnings: 2,
        }
    }

    #[test]
    fn test_aggregates() {
        let report = SimReport::from_runs(vec![
            run(4, Some(CrashCause::Obstacle)),
            run(12, Some(CrashCause::Ground)),
            run(20, None),
        ]);
        assert_eq!(report.num_runs, 3);
        assert_eq!(report.runs_timed_out, 1);
        assert_eq!(report.max_score, 20);
        assert!((report.avg_score - 12.0).abs() < 1e-9);
        assert_eq!(report.max_speed_reached, 23.0);
        assert_eq!(report.min_spawn_interval_reached, 125);
        assert_eq!(report.crash_causes.get("Obstacle"), Some(&1));
        assert_eq!(report.crash_causes.get("TimedOut"), Some(&1));
        assert_eq!(report.score_distribution.get(&10), Some(&1));
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_score, 0.0);
        assert!(report.to_text().contains("SIMULATION REPORT"));
    }

    #[test]
    fn test_json_output() {
        let report = SimReport::from_runs(vec![run(3, Some(CrashCause::Ceiling))]);
        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["max_score"], 3);
        assert_eq!(json["run_stats"][0]["crash"], "Ceiling");
    }
}
