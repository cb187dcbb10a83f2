//! Output rendering for batch receipts.

use anyhow::Result;
use prosemd_config::OutputFormat;
use prosemd_core::{BatchReceipt, DocumentOutcome, MetricField};
use prosemd_math::round_f64;

/// Render `receipt` in `format`, rounding scores when `precision` is set.
pub(crate) fn render(
    receipt: &BatchReceipt,
    format: OutputFormat,
    precision: Option<u32>,
) -> Result<String> {
    let receipt = match precision {
        Some(decimals) => rounded(receipt, decimals),
        None => receipt.clone(),
    };
    match format {
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(&receipt)?;
            s.push('\n');
            Ok(s)
        }
        OutputFormat::Jsonl => render_jsonl(&receipt.documents),
        OutputFormat::Md => Ok(render_md(&receipt)),
    }
}

fn rounded(receipt: &BatchReceipt, decimals: u32) -> BatchReceipt {
    let mut receipt = receipt.clone();
    for outcome in &mut receipt.documents {
        if let DocumentOutcome::Scored(doc) = outcome {
            doc.metrics = doc.metrics.map_scores(|v| round_f64(v, decimals));
        }
    }
    receipt
}

fn render_jsonl(documents: &[DocumentOutcome]) -> Result<String> {
    let mut s = String::new();
    for outcome in documents {
        s.push_str(&serde_json::to_string(outcome)?);
        s.push('\n');
    }
    Ok(s)
}

fn render_md(receipt: &BatchReceipt) -> String {
    let mut s = String::new();

    s.push_str("|ID|");
    for field in MetricField::ALL {
        s.push_str(field.label());
        s.push('|');
    }
    s.push('\n');
    s.push_str("|---|");
    for _ in MetricField::ALL {
        s.push_str("---:|");
    }
    s.push('\n');

    for outcome in &receipt.documents {
        if let DocumentOutcome::Scored(doc) = outcome {
            s.push_str(&format!("|{}|", escape_cell(&doc.id)));
            for (_, value) in doc.metrics.fields() {
                s.push_str(&format!("{value}|"));
            }
            s.push('\n');
        }
    }

    let failed: Vec<_> = receipt
        .documents
        .iter()
        .filter_map(|outcome| match outcome {
            DocumentOutcome::Failed(failure) => Some(failure),
            DocumentOutcome::Scored(_) => None,
        })
        .collect();
    if !failed.is_empty() {
        s.push_str("\n### Failed\n\n");
        for failure in failed {
            s.push_str(&format!(
                "- `{}` ({}): {}\n",
                failure.id, failure.kind, failure.message
            ));
        }
    }

    s.push_str(&format!(
        "\nScored: {}, failed: {}\n",
        receipt.summary.scored, receipt.summary.failed
    ));
    s
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
