// ==========================================
// 战略防务仪表盘 - HTML 页面渲染
// ==========================================
// 职责: DashboardView → 单文件 HTML（内联 CSS + SVG，无脚本）
// 说明: 标签页用单选框 + CSS 兄弟选择器切换
// ==========================================

use crate::domain::scenario::ScenarioConfig;
use crate::i18n::tr;
use crate::render::svg::render_chart;
use crate::view::models::{
    CardStyle, DashboardView, MetricCard, NarrativeLine, PanelContent, PanelView, ProjectEntry,
    TabView,
};

const BASE_CSS: &str = r#"
body{font-family:system-ui,-apple-system,"Segoe UI",sans-serif;margin:0;background:#f3f4f6;color:#111827}
header{background:linear-gradient(135deg,#0038B8,#1E3A8A);color:#fff;padding:1.5rem 2rem}
header h1{margin:0 0 .4rem 0;font-size:1.8rem}
header p{margin:0;opacity:.9}
main{display:flex;gap:1.5rem;padding:1.5rem 2rem}
aside{flex:0 0 260px;background:#fff;border-radius:10px;padding:1rem;align-self:flex-start}
aside dt{font-weight:600;margin-top:.6rem;font-size:.85rem;color:#374151}
aside dd{margin:0;font-size:.9rem}
.content{flex:1;min-width:0}
.tabs>input{display:none}
.tabs>label{display:inline-block;padding:.5rem 1rem;margin-right:.2rem;background:#e5e7eb;border-radius:8px 8px 0 0;cursor:pointer}
.tab-panel{display:none;background:#fff;border-radius:0 10px 10px 10px;padding:1rem}
.panels{display:grid;grid-template-columns:repeat(auto-fit,minmax(560px,1fr));gap:1rem}
.panel{border:1px solid #e5e7eb;border-radius:10px;padding:1rem;overflow-x:auto}
.panel h3{margin-top:0;font-size:1.05rem;color:#0038B8}
.cards{display:grid;grid-template-columns:repeat(4,1fr);gap:.8rem}
.card{border-radius:10px;padding:.8rem;background:#f9fafb;border-left:4px solid #6b7280}
.card h4{margin:0;font-size:.85rem}
.card .value{font-size:1.5rem;font-weight:700;margin:.3rem 0}
.card .caption,.card .delta{margin:0;font-size:.8rem}
.card-highlight{background:#0038B8;color:#fff;border-left-color:#1E90FF}
.card-defense{border-left-color:#DC2626}
.card-alliance{border-left-color:#228B22}
.delta.up{color:#047857}
.delta.down{color:#b91c1c}
.tab-hidden{color:#6b7280;font-style:italic}
table{border-collapse:collapse;width:100%;font-size:.9rem}
th,td{border-bottom:1px solid #e5e7eb;padding:.35rem .5rem;text-align:left}
footer{padding:0 2rem 1.5rem;color:#6b7280;font-size:.8rem}
"#;

/// HTML 文本转义
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// 渲染完整页面
pub fn render_page(view: &DashboardView) -> String {
    let loc = view.locale.as_str();
    let mut out = String::with_capacity(64 * 1024);

    out.push_str(&format!(
        r#"<!DOCTYPE html><html lang="{}"><head><meta charset="utf-8"><title>{}</title><style>{}{}</style></head><body>"#,
        escape(loc),
        escape(&view.title),
        BASE_CSS,
        tab_css(&view.tabs),
    ));
    out.push_str(&format!(
        "<header><h1>{}</h1><p>{}</p></header><main>",
        escape(&view.title),
        escape(&view.subtitle),
    ));

    out.push_str(&sidebar(view));

    out.push_str(r#"<div class="content tabs">"#);
    for (i, tab) in view.tabs.iter().enumerate() {
        let slug = tab.id.slug();
        out.push_str(&format!(
            r#"<input type="radio" name="tabs" id="tab-{slug}"{}><label for="tab-{slug}">{}</label>"#,
            if i == 0 { " checked" } else { "" },
            escape(&tab.title),
        ));
    }
    for tab in &view.tabs {
        out.push_str(&tab_section(tab, loc));
    }
    out.push_str("</div></main>");

    out.push_str(&format!(
        "<footer>{} {} &middot; {}</footer></body></html>",
        escape(&tr("ui.generated", loc)),
        view.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        escape(&view.render_id.to_string()),
    ));
    out
}

/// 每个标签页一条 CSS 规则: 选中的单选框显示对应区块
fn tab_css(tabs: &[TabView]) -> String {
    tabs.iter()
        .map(|t| {
            let slug = t.id.slug();
            format!(
                "#tab-{slug}:checked~#panel-{slug}{{display:block}}#tab-{slug}:checked+label{{background:#0038B8;color:#fff}}"
            )
        })
        .collect()
}

fn sidebar(view: &DashboardView) -> String {
    let loc = view.locale.as_str();
    let mut out = String::from("<aside>");
    out.push_str(&format!("<h2>{}</h2><dl>", escape(&tr("ui.controls", loc))));
    for (key, value) in [
        ("ui.mode", view.controls.mode.as_str()),
        ("ui.item", view.controls.item.as_str()),
        ("ui.simulation", view.controls.simulation.as_str()),
    ] {
        out.push_str(&definition(&tr(key, loc), value));
    }
    out.push_str("</dl>");
    out.push_str(&profile(&view.config, loc));
    out.push_str("</aside>");
    out
}

/// 情景配置的展示字段
fn profile(config: &ScenarioConfig, loc: &str) -> String {
    let none = tr("ui.none", loc);
    let join = |items: &[String]| -> String {
        if items.is_empty() {
            none.clone()
        } else {
            items.join(", ")
        }
    };
    let priorities: Vec<String> = config.priorities.iter().map(|p| p.to_string()).collect();

    let mut out = format!("<h2>{}</h2><dl>", escape(&tr("ui.profile", loc)));
    out.push_str(&definition(&tr("ui.kind", loc), &config.kind));
    out.push_str(&definition(&tr("ui.priorities", loc), &join(priorities.as_slice())));
    out.push_str(&definition(&tr("ui.doctrines", loc), &join(config.doctrines.as_slice())));
    out.push_str(&definition(&tr("ui.capabilities", loc), &join(config.capabilities.as_slice())));
    out.push_str(&definition(&tr("ui.projects", loc), &join(config.projects.as_slice())));
    if let Some(objectives) = &config.objectives {
        out.push_str(&definition(&tr("ui.objectives", loc), objectives));
    }
    out.push_str("</dl>");
    out
}

fn definition(term: &str, value: &str) -> String {
    format!("<dt>{}</dt><dd>{}</dd>", escape(term), escape(value))
}

fn tab_section(tab: &TabView, loc: &str) -> String {
    let mut out = format!(
        r#"<section class="tab-panel" id="panel-{}"><h2>{}</h2>"#,
        tab.id.slug(),
        escape(&tab.title),
    );
    if tab.hidden {
        out.push_str(&format!(
            r#"<p class="tab-hidden">{}</p>"#,
            escape(&tr("ui.tab_hidden", loc))
        ));
    } else {
        out.push_str(r#"<div class="panels">"#);
        for panel in &tab.panels {
            out.push_str(&panel_article(panel, loc));
        }
        out.push_str("</div>");
    }
    out.push_str("</section>");
    out
}

fn panel_article(panel: &PanelView, loc: &str) -> String {
    let body = match &panel.content {
        PanelContent::Cards { cards } => card_grid(cards),
        PanelContent::Chart { chart } => render_chart(chart),
        PanelContent::Narrative { lines } => narrative(lines),
        PanelContent::ProjectList { projects } => project_table(projects, loc),
    };
    format!(
        r#"<article class="panel" id="{}"><h3>{}</h3>{}</article>"#,
        escape(&panel.id),
        escape(&panel.title),
        body,
    )
}

fn card_grid(cards: &[MetricCard]) -> String {
    let mut out = String::from(r#"<div class="cards">"#);
    for card in cards {
        let style = match card.style {
            CardStyle::Highlight => "highlight",
            CardStyle::Defense => "defense",
            CardStyle::Alliance => "alliance",
            CardStyle::Plain => "plain",
        };
        out.push_str(&format!(
            r#"<div class="card card-{style}"><h4>{}</h4><p class="value">{}</p>"#,
            escape(&card.label),
            escape(&card.value),
        ));
        if let Some(caption) = &card.caption {
            out.push_str(&format!(r#"<p class="caption">{}</p>"#, escape(caption)));
        }
        if let Some(delta) = &card.delta {
            let trend = if delta.starts_with('-') { "down" } else { "up" };
            out.push_str(&format!(
                r#"<p class="delta {trend}">{}</p>"#,
                escape(delta)
            ));
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
    out
}

fn narrative(lines: &[NarrativeLine]) -> String {
    let items: String = lines
        .iter()
        .map(|l| {
            format!(
                "<li><strong>{}:</strong> {}</li>",
                escape(&l.label),
                escape(&l.text)
            )
        })
        .collect();
    format!("<ul>{}</ul>", items)
}

fn project_table(projects: &[ProjectEntry], loc: &str) -> String {
    let header: String = ["name", "countries", "kind", "status", "details"]
        .iter()
        .map(|k| format!("<th>{}</th>", escape(&tr(&format!("ui.project.{}", k), loc))))
        .collect();
    let rows: String = projects
        .iter()
        .map(|p| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&p.name),
                escape(&p.countries),
                escape(&p.kind),
                escape(&p.status),
                escape(&p.details),
            )
        })
        .collect();
    format!("<table><thead><tr>{}</tr></thead><tbody>{}</tbody></table>", header, rows)
}
