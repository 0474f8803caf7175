//! Rendering helpers (markdown and standalone HTML) for shopping lists.

use aisleplan_types::list::{AisleSection, ShoppingList};

/// Render a consolidated list as markdown, one section per aisle.
pub fn render_list_md(list: &ShoppingList, sections: &[AisleSection]) -> String {
    let mut out = String::new();
    out.push_str("# Shopping list\n\n");
    out.push_str(&format!("- Lines: {}\n", list.summary.lines_total));
    out.push_str(&format!("- Aisles: {}\n", list.summary.aisles_total));
    if let Some(at) = list.generated_at {
        out.push_str(&format!("- Generated: {}\n", at.format("%Y-%m-%d")));
    }
    out.push('\n');

    if sections.is_empty() {
        out.push_str("_Nothing to buy._\n");
        return out;
    }

    for section in sections {
        out.push_str(&format!("## {}\n\n", section.aisle_name));
        for line in &section.lines {
            match &line.note {
                Some(note) if !note.is_empty() => out.push_str(&format!(
                    "- {} — {} ({})\n",
                    line.ingredient_name, line.quantity, note
                )),
                _ => out.push_str(&format!("- {} — {}\n", line.ingredient_name, line.quantity)),
            }
        }
        out.push('\n');
    }

    out
}

/// Render a consolidated list as a standalone HTML page with per-item
/// checkboxes. Check-off state is stored in localStorage keyed by `list_id`
/// and item index, so the page works offline from a file:// URL.
pub fn render_list_html(list_id: &str, sections: &[AisleSection]) -> String {
    let mut sections_html = String::new();
    let mut index = 0usize;

    for section in sections {
        let mut items_html = String::new();
        for line in &section.lines {
            let note_html = match &line.note {
                Some(note) if !note.is_empty() => {
                    format!(" <span class=\"note\">({})</span>", escape(note))
                }
                _ => String::new(),
            };
            items_html.push_str(&format!(
                "<li><input type=\"checkbox\" data-index=\"{index}\" />\
                 <span>{} - {}{note_html}</span></li>",
                escape(&line.ingredient_name),
                line.quantity,
            ));
            index += 1;
        }
        sections_html.push_str(&format!(
            "<section class=\"aisle\"><h2>{}</h2><ul>{items_html}</ul></section>",
            escape(&section.aisle_name)
        ));
    }

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Shopping List</title>
  <style>
    body {{ font-family: Arial, sans-serif; margin: 16px; background: #fafafa; }}
    h1 {{ font-size: 1.5rem; margin-bottom: 0.5rem; }}
    h2 {{ font-size: 1.1rem; margin-top: 1rem; }}
    ul {{ list-style: none; padding-left: 0; }}
    li {{ display: flex; align-items: center; gap: 0.6rem; padding: 0.4rem 0; }}
    .note {{ color: #666; font-size: 0.9rem; }}
    .aisle {{ background: #fff; padding: 0.8rem; margin-bottom: 0.8rem; border-radius: 8px; box-shadow: 0 1px 2px rgba(0,0,0,0.05); }}
  </style>
</head>
<body>
  <h1>Shopping List</h1>
  {sections_html}
  <script>
    const listId = "{list_id}";
    function storageKey(index) {{
      return `shopping-list-${{listId}}-${{index}}`;
    }}
    document.querySelectorAll("input[type=checkbox]").forEach((checkbox) => {{
      const key = storageKey(checkbox.dataset.index);
      checkbox.checked = localStorage.getItem(key) === "true";
      checkbox.addEventListener("change", () => {{
        localStorage.setItem(key, checkbox.checked ? "true" : "false");
      }});
    }});
  </script>
</body>
</html>
"#,
        list_id = escape(list_id),
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
