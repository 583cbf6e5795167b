// ==========================================
// 战略防务仪表盘 - SVG 图表渲染
// ==========================================
// 职责: ChartSpec → 内联 SVG 字符串
// 支持: 折线(含次坐标) / 分组柱 / 柱+折线 / 气泡散点 / 矩形树图
// 说明: 纯字符串拼接，不依赖外部绘图库
// ==========================================

use crate::render::html::escape;
use crate::view::models::{ChartData, ChartKind, ChartSpec, NamedSeries, ScatterPoint, TreemapNode};

pub const WIDTH: f64 = 640.0;
pub const HEIGHT: f64 = 380.0;

const LEFT: f64 = 64.0;
const RIGHT: f64 = 64.0;
const TOP: f64 = 44.0;
const BOTTOM: f64 = 76.0;
const PLOT_W: f64 = WIDTH - LEFT - RIGHT;
const PLOT_H: f64 = HEIGHT - TOP - BOTTOM;
const TICKS: usize = 5;

const PALETTE: [&str; 8] = [
    "#0038B8", "#1E90FF", "#228B22", "#D97706", "#DC2626", "#7C3AED", "#0891B2", "#6B7280",
];

fn color(i: usize) -> &'static str {
    PALETTE[i % PALETTE.len()]
}

// ==========================================
// 坐标映射
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq)]
struct Scale {
    min: f64,
    max: f64,
}

impl Scale {
    /// 按数据范围拟合；from_zero 时下界包含 0
    fn fit(values: &[f64], from_zero: bool) -> Self {
        let (lo, hi) = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if lo > hi {
            return Self { min: 0.0, max: 1.0 };
        }

        let (lo, hi) = if from_zero {
            (lo.min(0.0), hi.max(0.0))
        } else {
            (lo, hi)
        };
        let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
        Self {
            min: if from_zero && lo == 0.0 { 0.0 } else { lo - pad },
            max: hi + pad,
        }
    }

    fn span(&self) -> f64 {
        self.max - self.min
    }

    fn to_x(&self, v: f64) -> f64 {
        LEFT + PLOT_W * (v - self.min) / self.span()
    }

    fn to_y(&self, v: f64) -> f64 {
        TOP + PLOT_H * (1.0 - (v - self.min) / self.span())
    }

    fn ticks(&self) -> impl Iterator<Item = f64> + '_ {
        (0..=TICKS).map(move |i| self.min + self.span() * i as f64 / TICKS as f64)
    }
}

fn tick_label(v: f64) -> String {
    if v.abs() >= 100.0 || v.fract().abs() < 1e-9 {
        format!("{:.0}", v)
    } else {
        format!("{:.1}", v)
    }
}

// ==========================================
// 入口
// ==========================================

/// 渲染一张图表
pub fn render_chart(chart: &ChartSpec) -> String {
    let body = match &chart.data {
        ChartData::TimeSeries { years, series } => {
            let categories: Vec<String> = years.iter().map(|y| y.to_string()).collect();
            let step = (years.len() / 10).max(1);
            series_chart(chart, &categories, series, step)
        }
        ChartData::Categorical { categories, series } => {
            series_chart(chart, categories, series, 1)
        }
        ChartData::Points {
            points,
            y_categories,
        } => scatter_chart(chart, points, y_categories.as_deref()),
        ChartData::Hierarchy { nodes } => treemap_chart(nodes),
    };

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" class="chart chart-{kind}" role="img">{body}</svg>"##,
        w = WIDTH,
        h = HEIGHT,
        kind = kind_slug(chart.kind),
        body = body,
    )
}

fn kind_slug(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Line => "line",
        ChartKind::GroupedBar => "grouped-bar",
        ChartKind::Bar => "bar",
        ChartKind::Scatter => "scatter",
        ChartKind::Treemap => "treemap",
        ChartKind::BarLine => "bar-line",
    }
}

// ==========================================
// 公共部件
// ==========================================

fn frame(out: &mut String) {
    out.push_str(&format!(
        r##"<line x1="{l}" y1="{b}" x2="{r}" y2="{b}" stroke="#9ca3af"/><line x1="{l}" y1="{t}" x2="{l}" y2="{b}" stroke="#9ca3af"/>"##,
        l = LEFT,
        r = WIDTH - RIGHT,
        t = TOP,
        b = TOP + PLOT_H,
    ));
}

/// 数值刻度；right 为 true 时画在右侧（次坐标）
fn y_ticks(out: &mut String, scale: &Scale, right: bool) {
    let (x, anchor) = if right {
        (WIDTH - RIGHT + 6.0, "start")
    } else {
        (LEFT - 6.0, "end")
    };
    for v in scale.ticks() {
        let y = scale.to_y(v);
        if !right {
            out.push_str(&format!(
                r##"<line x1="{}" y1="{y:.1}" x2="{}" y2="{y:.1}" stroke="#e5e7eb"/>"##,
                LEFT,
                WIDTH - RIGHT,
            ));
        }
        out.push_str(&format!(
            r##"<text x="{x}" y="{:.1}" text-anchor="{anchor}" font-size="10" fill="#6b7280">{}</text>"##,
            y + 3.0,
            tick_label(v),
        ));
    }
}

fn axis_titles(out: &mut String, chart: &ChartSpec) {
    if !chart.x_label.is_empty() {
        out.push_str(&format!(
            r##"<text x="{}" y="{}" text-anchor="middle" font-size="11" fill="#374151">{}</text>"##,
            LEFT + PLOT_W / 2.0,
            HEIGHT - 8.0,
            escape(&chart.x_label),
        ));
    }
    if !chart.y_label.is_empty() {
        let cy = TOP + PLOT_H / 2.0;
        out.push_str(&format!(
            r##"<text x="14" y="{cy}" text-anchor="middle" font-size="11" fill="#374151" transform="rotate(-90, 14, {cy})">{}</text>"##,
            escape(&chart.y_label),
        ));
    }
    if let Some(y2) = &chart.y2_label {
        let (x, cy) = (WIDTH - 10.0, TOP + PLOT_H / 2.0);
        out.push_str(&format!(
            r##"<text x="{x}" y="{cy}" text-anchor="middle" font-size="11" fill="#374151" transform="rotate(90, {x}, {cy})">{}</text>"##,
            escape(y2),
        ));
    }
}

fn legend(out: &mut String, items: &[(&str, &'static str)]) {
    let mut x = LEFT;
    let mut y = 14.0;
    for (name, fill) in items {
        let width = 18.0 + name.chars().count() as f64 * 6.2;
        if x + width > WIDTH - 8.0 && x > LEFT {
            x = LEFT;
            y += 14.0;
        }
        out.push_str(&format!(
            r##"<rect x="{x:.1}" y="{:.1}" width="10" height="10" fill="{fill}"/><text x="{:.1}" y="{:.1}" font-size="10" fill="#374151">{}</text>"##,
            y - 9.0,
            x + 14.0,
            y,
            escape(name),
        ));
        x += width + 10.0;
    }
}

fn x_category_labels(out: &mut String, categories: &[String], step: usize) {
    let band = PLOT_W / categories.len().max(1) as f64;
    let rotate = categories.iter().any(|c| c.chars().count() > 8);
    let y = TOP + PLOT_H + 14.0;
    for (i, label) in categories.iter().enumerate().step_by(step) {
        let x = LEFT + band * (i as f64 + 0.5);
        if rotate {
            out.push_str(&format!(
                r##"<text x="{x:.1}" y="{y}" text-anchor="end" font-size="9" fill="#4b5563" transform="rotate(-30, {x:.1}, {y})">{}</text>"##,
                escape(label),
            ));
        } else {
            out.push_str(&format!(
                r##"<text x="{x:.1}" y="{y}" text-anchor="middle" font-size="10" fill="#4b5563">{}</text>"##,
                escape(label),
            ));
        }
    }
}

// ==========================================
// 序列图（折线 / 柱 / 柱+折线）
// ==========================================

fn series_chart(
    chart: &ChartSpec,
    categories: &[String],
    series: &[NamedSeries],
    label_step: usize,
) -> String {
    let mut out = String::new();
    let n = categories.len().max(1);
    let band = PLOT_W / n as f64;
    let center = |i: usize| LEFT + band * (i as f64 + 0.5);

    let collect = |secondary: bool| -> Vec<f64> {
        series
            .iter()
            .filter(|s| s.secondary == secondary)
            .flat_map(|s| s.values.iter().copied())
            .collect()
    };
    let primary = Scale::fit(&collect(false), true);
    let has_secondary = series.iter().any(|s| s.secondary);
    let secondary = Scale::fit(&collect(true), true);

    frame(&mut out);
    y_ticks(&mut out, &primary, false);
    if has_secondary {
        y_ticks(&mut out, &secondary, true);
    }
    x_category_labels(&mut out, categories, label_step);

    // 折线图全部画线；其他类型主坐标画柱、次坐标画线
    let as_bar = |s: &NamedSeries| chart.kind != ChartKind::Line && !s.secondary;
    let bar_count = series.iter().filter(|s| as_bar(*s)).count();
    let group_w = band * 0.8;
    let bar_w = group_w / bar_count.max(1) as f64;

    let mut bar_slot = 0;
    for (idx, s) in series.iter().enumerate() {
        let fill = color(idx);
        let scale = if s.secondary { &secondary } else { &primary };

        if as_bar(s) {
            let base = scale.to_y(scale.min.max(0.0));
            for (i, v) in s.values.iter().enumerate() {
                let x = center(i) - group_w / 2.0 + bar_slot as f64 * bar_w;
                let y = scale.to_y(*v);
                out.push_str(&format!(
                    r##"<rect x="{x:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{fill}" opacity="0.85"><title>{}: {}</title></rect>"##,
                    y.min(base),
                    (bar_w - 1.0).max(1.0),
                    (base - y).abs(),
                    escape(&s.name),
                    tick_label(*v),
                ));
            }
            bar_slot += 1;
        } else {
            let points: Vec<String> = s
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| format!("{:.1},{:.1}", center(i), scale.to_y(*v)))
                .collect();
            let dash = if s.secondary && chart.kind == ChartKind::Line {
                r##" stroke-dasharray="6,3""##
            } else {
                ""
            };
            out.push_str(&format!(
                r##"<polyline points="{}" fill="none" stroke="{fill}" stroke-width="2.5"{dash}/>"##,
                points.join(" "),
            ));
            if s.values.len() <= 12 {
                for (i, v) in s.values.iter().enumerate() {
                    out.push_str(&format!(
                        r##"<circle cx="{:.1}" cy="{:.1}" r="3.5" fill="{fill}"/>"##,
                        center(i),
                        scale.to_y(*v),
                    ));
                }
            }
        }
    }

    let items: Vec<(&str, &'static str)> = series
        .iter()
        .enumerate()
        .map(|(i, s)| (s.name.as_str(), color(i)))
        .collect();
    legend(&mut out, &items);
    axis_titles(&mut out, chart);
    out
}

// ==========================================
// 气泡散点
// ==========================================

fn scatter_chart(
    chart: &ChartSpec,
    points: &[ScatterPoint],
    y_categories: Option<&[String]>,
) -> String {
    let mut out = String::new();
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let x_scale = Scale::fit(&xs, false);
    let y_scale = match y_categories {
        Some(cats) => Scale {
            min: -0.5,
            max: cats.len().max(1) as f64 - 0.5,
        },
        None => {
            let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
            Scale::fit(&ys, false)
        }
    };
    let max_size = points.iter().map(|p| p.size).fold(0.0_f64, f64::max);

    frame(&mut out);
    match y_categories {
        Some(cats) => {
            for (i, cat) in cats.iter().enumerate() {
                out.push_str(&format!(
                    r##"<text x="{}" y="{:.1}" text-anchor="end" font-size="10" fill="#6b7280">{}</text>"##,
                    LEFT - 6.0,
                    y_scale.to_y(i as f64) + 3.0,
                    escape(cat),
                ));
            }
        }
        None => y_ticks(&mut out, &y_scale, false),
    }
    for v in x_scale.ticks() {
        out.push_str(&format!(
            r##"<text x="{:.1}" y="{}" text-anchor="middle" font-size="10" fill="#6b7280">{}</text>"##,
            x_scale.to_x(v),
            TOP + PLOT_H + 14.0,
            tick_label(v),
        ));
    }

    let mut groups: Vec<&str> = Vec::new();
    for p in points {
        if !groups.contains(&p.group.as_str()) {
            groups.push(p.group.as_str());
        }
    }

    for p in points {
        let gi = groups.iter().position(|g| *g == p.group).unwrap_or(0);
        let r = if max_size > 0.0 {
            4.0 + 18.0 * (p.size.max(0.0) / max_size).sqrt()
        } else {
            6.0
        };
        let (cx, cy) = (x_scale.to_x(p.x), y_scale.to_y(p.y));
        out.push_str(&format!(
            r##"<circle cx="{cx:.1}" cy="{cy:.1}" r="{r:.1}" fill="{}" opacity="0.7"><title>{}</title></circle><text x="{cx:.1}" y="{:.1}" text-anchor="middle" font-size="9" fill="#111827">{}</text>"##,
            color(gi),
            escape(&p.label),
            cy - r - 3.0,
            escape(&p.label),
        ));
    }

    // 分组即 y 轴分类时不再重复图例
    if y_categories.is_none() && groups.len() > 1 && groups.len() < points.len() {
        let items: Vec<(&str, &'static str)> =
            groups.iter().enumerate().map(|(i, g)| (*g, color(i))).collect();
        legend(&mut out, &items);
    }
    axis_titles(&mut out, chart);
    out
}

// ==========================================
// 矩形树图（两级: 分组列 → 叶子行）
// ==========================================

fn treemap_chart(nodes: &[TreemapNode]) -> String {
    let mut out = String::new();
    let mut groups: Vec<(&str, Vec<&TreemapNode>)> = Vec::new();
    for node in nodes {
        match groups.iter_mut().find(|(g, _)| *g == node.group) {
            Some((_, leaves)) => leaves.push(node),
            None => groups.push((node.group.as_str(), vec![node])),
        }
    }

    let total: f64 = nodes.iter().map(|n| n.weight.max(0.0)).sum();
    if total <= 0.0 {
        return out;
    }

    let (x0, y0, w, h) = (8.0, 8.0, WIDTH - 16.0, HEIGHT - 16.0);
    let mut x = x0;
    for (gi, (group, leaves)) in groups.iter().enumerate() {
        let group_weight: f64 = leaves.iter().map(|n| n.weight.max(0.0)).sum();
        let gw = w * group_weight / total;
        let mut y = y0 + 18.0;
        out.push_str(&format!(
            r##"<text x="{:.1}" y="{:.1}" font-size="10" font-weight="600" fill="#111827">{}</text>"##,
            x + 4.0,
            y0 + 12.0,
            escape(group),
        ));
        for leaf in leaves {
            let lh = if group_weight > 0.0 {
                (h - 18.0) * leaf.weight.max(0.0) / group_weight
            } else {
                0.0
            };
            out.push_str(&format!(
                r##"<rect x="{x:.1}" y="{y:.1}" width="{:.1}" height="{:.1}" fill="{}" stroke="#ffffff" stroke-width="2" opacity="0.85"><title>{}</title></rect><text x="{:.1}" y="{:.1}" font-size="10" fill="#ffffff">{}</text>"##,
                (gw - 2.0).max(0.0),
                (lh - 2.0).max(0.0),
                color(gi),
                escape(&leaf.label),
                x + 6.0,
                y + 16.0,
                escape(&leaf.label),
            ));
            y += lh;
        }
        x += gw;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(kind: ChartKind, data: ChartData) -> ChartSpec {
        ChartSpec {
            kind,
            x_label: "Année".into(),
            y_label: "Niveau".into(),
            y2_label: None,
            data,
        }
    }

    #[test]
    fn test_scale_fit_from_zero() {
        let scale = Scale::fit(&[10.0, 20.0], true);
        assert_eq!(scale.min, 0.0);
        assert!(scale.max > 20.0);
        assert_eq!(Scale::fit(&[], true), Scale { min: 0.0, max: 1.0 });
    }

    #[test]
    fn test_line_chart_draws_one_polyline_per_series() {
        let data = ChartData::TimeSeries {
            years: vec![2000, 2001, 2002],
            series: vec![
                NamedSeries {
                    key: "a".into(),
                    name: "A".into(),
                    values: vec![1.0, 2.0, 3.0],
                    secondary: false,
                },
                NamedSeries {
                    key: "b".into(),
                    name: "B & C".into(),
                    values: vec![3.0, 2.0, 1.0],
                    secondary: true,
                },
            ],
        };
        let svg = render_chart(&spec(ChartKind::Line, data));
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<polyline").count(), 2);
        assert!(svg.contains("B &amp; C"));
    }

    #[test]
    fn test_bar_line_splits_by_axis() {
        let data = ChartData::Categorical {
            categories: vec!["x".into(), "y".into()],
            series: vec![
                NamedSeries {
                    key: "bar".into(),
                    name: "bar".into(),
                    values: vec![5.0, 6.0],
                    secondary: false,
                },
                NamedSeries {
                    key: "line".into(),
                    name: "line".into(),
                    values: vec![1.0, 2.0],
                    secondary: true,
                },
            ],
        };
        let svg = render_chart(&spec(ChartKind::BarLine, data));
        assert_eq!(svg.matches("<polyline").count(), 1);
        // 2 个柱 + 2 个图例方块
        assert_eq!(svg.matches("<rect").count(), 4);
    }

    #[test]
    fn test_treemap_empty_weights_render_empty_svg() {
        let svg = render_chart(&spec(ChartKind::Treemap, ChartData::Hierarchy { nodes: vec![] }));
        assert!(!svg.contains("<rect"));
    }
}
