//! Pure string templating for the brief preview and the PDF source document.
//!
//! Every user-supplied or AI-supplied value goes through [`escape_html`]
//! before it is embedded; URL values placed into `href` additionally go
//! through [`escape_attr`]. Missing optional values render as an em-dash,
//! never as empty markup.

use briefline_core::{BriefInput, StrategyDraft};

/// Escape `& < > " '` for embedding in HTML text content.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a value for embedding inside a double-quoted attribute.
#[must_use]
pub fn escape_attr(s: &str) -> String {
    s.trim().replace('"', "&quot;")
}

fn text_or_dash(s: &str) -> String {
    if s.trim().is_empty() {
        "—".to_string()
    } else {
        escape_html(s)
    }
}

fn channels_or_dash(channels: &[String]) -> String {
    if channels.is_empty() {
        "—".to_string()
    } else {
        escape_html(&channels.join(", "))
    }
}

fn site_link(site: &str) -> String {
    if site.trim().is_empty() {
        "—".to_string()
    } else {
        format!(
            r#"<a href="{}" target="_blank">{}</a>"#,
            escape_attr(site),
            escape_html(site)
        )
    }
}

fn list_block(title: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let lis: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();
    format!("<h3>{title}</h3><ul>{lis}</ul>")
}

/// Build the short HTML summary returned for on-page display.
#[must_use]
pub fn build_preview_html(brief: &BriefInput, draft: &StrategyDraft) -> String {
    let mut draft_block = String::new();
    if !draft.summary.trim().is_empty() {
        draft_block.push_str(&format!(
            r#"<h3 style="margin:12px 0 4px;">Strategy draft</h3><p style="margin:0 0 8px;">{}</p>"#,
            escape_html(&draft.summary)
        ));
    }
    if !draft.offers.is_empty() {
        let offers: String = draft
            .offers
            .iter()
            .map(|o| format!("<li>{}</li>", escape_html(o)))
            .collect();
        draft_block.push_str(&format!(
            r#"<ul style="padding-left:18px; margin:0 0 8px;">{offers}</ul>"#
        ));
    }

    format!(
        r#"<div style="font-family:system-ui,-apple-system,Segoe UI,Roboto,Arial,sans-serif; line-height:1.5; max-width:720px;">
  <h2 style="margin:0 0 8px;">Brief summary</h2>
  <p style="margin:0 0 12px; color:#555;">This is a preview. The full brief (PDF) will arrive by e-mail after review.</p>
  <ul style="padding-left:18px; margin:0 0 12px;">
    <li><b>Goal:</b> {goal}</li>
    <li><b>Product:</b> {product}</li>
    <li><b>Site:</b> {site}</li>
    <li><b>Geo:</b> {geo}</li>
    <li><b>Budget:</b> {budget}</li>
    <li><b>Audience:</b> {audience}</li>
    <li><b>Channels of interest:</b> {channels}</li>
    <li><b>Constraints:</b> {constraints}</li>
  </ul>
  {draft_block}
  <hr style="border:none;border-top:1px solid #eee; margin:12px 0;">
  <p style="margin:0; color:#777;">Disclaimer: this preview was generated automatically from your answers. The full version will be reviewed by a strategist.</p>
</div>"#,
        goal = escape_html(&brief.goal),
        product = escape_html(&brief.product),
        site = site_link(&brief.site),
        geo = text_or_dash(&brief.geo),
        budget = text_or_dash(&brief.budget),
        audience = text_or_dash(&brief.audience),
        channels = channels_or_dash(&brief.channels),
        constraints = text_or_dash(&brief.constraints),
        draft_block = draft_block,
    )
}

/// Build the longer HTML document that is rasterized into the PDF.
#[must_use]
pub fn build_document_html(brief: &BriefInput, draft: &StrategyDraft) -> String {
    let mut sections = String::new();

    if !draft.summary.trim().is_empty() {
        sections.push_str(&format!(
            "<h2>Strategy summary</h2><p>{}</p>",
            escape_html(&draft.summary)
        ));
    }
    sections.push_str(&list_block("Offers", &draft.offers));
    sections.push_str(&list_block("Headlines", &draft.headlines));
    sections.push_str(&list_block("Audience segments", &draft.segments));

    if !draft.channel_plan.is_empty() {
        let rows: String = draft
            .channel_plan
            .iter()
            .map(|entry| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape_html(&entry.channel),
                    escape_html(&entry.role),
                    escape_html(&entry.budget_share)
                )
            })
            .collect();
        sections.push_str(&format!(
            "<h2>Channel plan</h2><table><thead><tr><th>Channel</th><th>Role</th><th>Budget share</th></tr></thead><tbody>{rows}</tbody></table>"
        ));
    }

    sections.push_str(&list_block("Creative directions", &draft.creatives));
    sections.push_str(&list_block("KPI baseline", &draft.kpi_baseline));
    sections.push_str(&list_block("Risks", &draft.risks));
    sections.push_str(&list_block("Next steps", &draft.next_steps));

    format!(
        r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<style>
  body {{ font-family: system-ui, -apple-system, "Segoe UI", Roboto, Arial, sans-serif; line-height: 1.5; color: #222; margin: 0; }}
  h1 {{ font-size: 22px; margin: 0 0 4px; }}
  h2 {{ font-size: 16px; margin: 18px 0 6px; border-bottom: 1px solid #eee; padding-bottom: 4px; }}
  h3 {{ font-size: 14px; margin: 14px 0 4px; }}
  table {{ border-collapse: collapse; width: 100%; }}
  th, td {{ text-align: left; border-bottom: 1px solid #eee; padding: 4px 8px 4px 0; }}
  .muted {{ color: #777; font-size: 12px; }}
</style>
</head>
<body>
<h1>Marketing brief</h1>
<p class="muted">Prepared for {email}</p>
<h2>Intake</h2>
<table><tbody>
  <tr><th>Goal</th><td>{goal}</td></tr>
  <tr><th>Product</th><td>{product}</td></tr>
  <tr><th>Site</th><td>{site}</td></tr>
  <tr><th>Geo</th><td>{geo}</td></tr>
  <tr><th>Budget</th><td>{budget}</td></tr>
  <tr><th>Audience</th><td>{audience}</td></tr>
  <tr><th>Channels of interest</th><td>{channels}</td></tr>
  <tr><th>Constraints</th><td>{constraints}</td></tr>
</tbody></table>
{sections}
<hr>
<p class="muted">Generated automatically from the submitted brief. The final version will be reviewed by a strategist.</p>
</body>
</html>"#,
        email = escape_html(&brief.email),
        goal = escape_html(&brief.goal),
        product = escape_html(&brief.product),
        site = site_link(&brief.site),
        geo = text_or_dash(&brief.geo),
        budget = text_or_dash(&brief.budget),
        audience = text_or_dash(&brief.audience),
        channels = channels_or_dash(&brief.channels),
        constraints = text_or_dash(&brief.constraints),
        sections = sections,
    )
}
