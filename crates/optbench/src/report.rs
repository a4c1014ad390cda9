//! Report generation for aggregated benchmark results.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::result::AggregatedBenchmarkResult;

/// `0.25` becomes `q25`, `0.333` becomes `q33.3`.
fn quantile_label(level: f64) -> String {
    let percent = format!("{:.1}", level * 100.0);
    let percent = percent.strip_suffix(".0").unwrap_or(&percent);
    format!("q{percent}")
}

/// CSV exporter for aggregated results.
///
/// One row per optimization step, with the mean and one column per
/// reported quantile level.
///
/// # Example
///
/// ```
/// use optbench::{stubs, AggregatedBenchmarkResult, CsvExporter};
///
/// let agg = AggregatedBenchmarkResult::from_benchmark_results(&[
///     stubs::benchmark_result(),
/// ])
/// .unwrap();
/// let csv = CsvExporter::to_string(&agg);
/// assert!(csv.contains("step,mean,q25,q50,q75"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports an aggregated result to a CSV string.
    pub fn to_string(result: &AggregatedBenchmarkResult) -> String {
        let mut output = String::new();

        write!(output, "step,mean").unwrap();
        for (level, _) in &result.optimization_trace_quantiles {
            write!(output, ",{}", quantile_label(*level)).unwrap();
        }
        writeln!(output).unwrap();

        for step in 0..result.trace_len() {
            write!(output, "{step},{}", result.optimization_trace_mean[step]).unwrap();
            for (_, trace) in &result.optimization_trace_quantiles {
                write!(output, ",{}", trace[step]).unwrap();
            }
            writeln!(output).unwrap();
        }

        output
    }

    /// Exports an aggregated result to a CSV file.
    pub fn to_file(result: &AggregatedBenchmarkResult, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }

    /// Writes an aggregated result as CSV to a writer.
    pub fn write<W: Write>(result: &AggregatedBenchmarkResult, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(result).as_bytes())
    }
}

/// Markdown report generator.
///
/// # Example
///
/// ```
/// use optbench::{stubs, AggregatedBenchmarkResult, MarkdownReport};
///
/// let agg = AggregatedBenchmarkResult::from_benchmark_results(&[
///     stubs::benchmark_result(),
/// ])
/// .unwrap();
/// let md = MarkdownReport::to_string(&agg);
/// assert!(md.contains("# Benchmark: stub_result"));
/// assert!(md.contains("## Summary"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(result: &AggregatedBenchmarkResult) -> String {
        let mut output = String::new();

        writeln!(output, "# Benchmark: {}", result.name).unwrap();
        writeln!(output).unwrap();

        writeln!(output, "## Summary").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "| Metric | Value |").unwrap();
        writeln!(output, "|--------|-------|").unwrap();
        writeln!(output, "| Trace Length | {} |", result.trace_len()).unwrap();
        if let Some(final_mean) = result.optimization_trace_mean.last() {
            writeln!(output, "| Final Mean | {final_mean:.6} |").unwrap();
        }
        for (level, trace) in &result.optimization_trace_quantiles {
            if let Some(final_value) = trace.last() {
                writeln!(
                    output,
                    "| Final {} | {final_value:.6} |",
                    quantile_label(*level)
                )
                .unwrap();
            }
        }
        writeln!(
            output,
            "| Fit Time | {:.4}s ± {:.4}s |",
            result.fit_time.mean, result.fit_time.std_dev
        )
        .unwrap();
        writeln!(
            output,
            "| Gen Time | {:.4}s ± {:.4}s |",
            result.gen_time.mean, result.gen_time.std_dev
        )
        .unwrap();

        output
    }

    /// Generates a comparison table for multiple aggregated results.
    pub fn comparison(results: &[&AggregatedBenchmarkResult]) -> String {
        let mut output = String::new();

        writeln!(output, "## Comparison").unwrap();
        writeln!(output).unwrap();
        writeln!(
            output,
            "| Result | Final Mean | Fit Time (s) | Gen Time (s) |"
        )
        .unwrap();
        writeln!(
            output,
            "|--------|------------|--------------|--------------|"
        )
        .unwrap();

        for result in results {
            let final_mean = result
                .optimization_trace_mean
                .last()
                .map(|v| format!("{v:.6}"))
                .unwrap_or_else(|| "N/A".to_string());
            writeln!(
                output,
                "| {} | {} | {:.4} | {:.4} |",
                result.name, final_mean, result.fit_time.mean, result.gen_time.mean,
            )
            .unwrap();
        }

        output
    }

    /// Writes a Markdown report to a file.
    pub fn to_file(result: &AggregatedBenchmarkResult, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }

    /// Writes a Markdown report to a writer.
    pub fn write<W: Write>(result: &AggregatedBenchmarkResult, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(result).as_bytes())
    }
}
