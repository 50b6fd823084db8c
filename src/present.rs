use std::io::{self, Write};

/// Fixed histogram bucket edges, in percent.
pub const HISTOGRAM_BINS: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

/// Where computed results end up. Keeps rendering out of the grade logic.
pub trait Presenter {
    fn show_text(&mut self, lines: &[String]) -> io::Result<()>;

    fn show_histogram(&mut self, scores: &[f64], title: &str, bins: &[f64]) -> io::Result<()>;
}

/// Count scores per bucket. Buckets are `[lo, hi)` except the last, which
/// also takes its upper edge; scores outside the edges are not counted.
pub fn bucket_counts(scores: &[f64], bins: &[f64]) -> Vec<usize> {
    let buckets = bins.len().saturating_sub(1);
    let mut counts = vec![0; buckets];

    for &score in scores {
        for (i, edge) in bins.windows(2).enumerate() {
            let last = i + 1 == buckets;
            if score >= edge[0] && (score < edge[1] || (last && score == edge[1])) {
                counts[i] += 1;
                break;
            }
        }
    }
    counts
}

/// Plain-text presenter: lines as-is, histograms as horizontal bars.
pub struct TerminalPresenter<W: Write> {
    out: W,
    bar_width: usize,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, bar_width: usize) -> Self {
        Self {
            out,
            bar_width: bar_width.max(1),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn show_text(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }

    fn show_histogram(&mut self, scores: &[f64], title: &str, bins: &[f64]) -> io::Result<()> {
        let counts = bucket_counts(scores, bins);
        let tallest = counts.iter().copied().max().unwrap_or(0);

        writeln!(self.out, "{title}")?;
        writeln!(self.out, "Score (%) | Number of students")?;
        for (edge, count) in bins.windows(2).zip(&counts) {
            let len = if tallest == 0 {
                0
            } else {
                (count * self.bar_width).div_ceil(tallest)
            };
            writeln!(
                self.out,
                "{:>4}-{:<4} | {} {}",
                edge[0],
                edge[1],
                "#".repeat(len),
                count
            )?;
        }
        self.out.flush()
    }
}
