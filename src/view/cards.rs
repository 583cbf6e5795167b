// ==========================================
// 战略防务仪表盘 - 战略指标卡
// ==========================================
// 职责: 末年数值 + 相对首年的变化量
// 缺失列: 拦截率按 0 展示；反导覆盖率卡直接跳过
// ==========================================

use crate::domain::dataset::Dataset;
use crate::domain::metric::MetricId;
use crate::domain::reference::{RESERVISTS_THOUSANDS, US_AID_BILLIONS};
use crate::i18n::{tr, tr_with_args};
use crate::view::models::{CardStyle, MetricCard};

/// 相对变化百分比；基准为 0 时无定义
fn growth_pct(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 {
        None
    } else {
        Some((to - from) / from * 100.0)
    }
}

fn signed(value: f64) -> String {
    format!("{:+.1}%", value)
}

struct CardFactory<'a> {
    dataset: &'a Dataset,
    locale: &'a str,
}

impl CardFactory<'_> {
    fn last(&self, id: MetricId) -> Option<f64> {
        self.dataset.series(id).and_then(|s| s.last())
    }

    fn first(&self, id: MetricId) -> Option<f64> {
        self.dataset.series(id).and_then(|s| s.first())
    }

    fn label(&self, card: &str) -> String {
        tr(&format!("cards.{}.label", card), self.locale)
    }

    fn card(
        &self,
        id: &str,
        value: String,
        caption: Option<String>,
        delta: Option<String>,
        style: CardStyle,
    ) -> MetricCard {
        MetricCard {
            id: id.to_string(),
            label: self.label(id),
            value,
            caption,
            delta,
            style,
        }
    }
}

/// 生成仪表盘指标卡（固定顺序，最多 8 张）
pub fn strategic_cards(dataset: &Dataset, locale: &str) -> Vec<MetricCard> {
    let f = CardFactory { dataset, locale };
    let end_year = dataset.years().end().to_string();
    let since = Some(tr_with_args(
        "cards.delta_since",
        locale,
        &[("year", &dataset.years().start().to_string())],
    ));
    let mut cards = Vec::with_capacity(8);

    // 第一行：高亮卡
    let budget = f.last(MetricId::Budget).unwrap_or_default();
    let gdp = f.last(MetricId::GdpShare).unwrap_or_default();
    cards.push(MetricCard {
        label: tr_with_args("cards.budget.label", locale, &[("year", &end_year)]),
        ..f.card(
            "budget",
            tr_with_args("cards.budget.value", locale, &[("value", &format!("{:.1}", budget))]),
            Some(tr_with_args(
                "cards.budget.caption",
                locale,
                &[("value", &format!("{:.1}", gdp))],
            )),
            None,
            CardStyle::Highlight,
        )
    });

    let personnel = f.last(MetricId::Personnel).unwrap_or_default();
    cards.push(f.card(
        "personnel",
        format!("{:.0}K", personnel),
        Some(tr_with_args(
            "cards.personnel.caption",
            locale,
            &[("value", &format!("{:.0}", RESERVISTS_THOUSANDS))],
        )),
        None,
        CardStyle::Highlight,
    ));

    let interception = f.last(MetricId::InterceptionRate).unwrap_or(0.0);
    cards.push(f.card(
        "interception",
        format!("{:.1}%", interception),
        Some(tr("cards.interception.caption", locale)),
        None,
        CardStyle::Defense,
    ));

    let cooperation = f.last(MetricId::AllianceCooperation).unwrap_or_default();
    cards.push(f.card(
        "us_cooperation",
        format!("{:.0}%", cooperation),
        Some(tr_with_args(
            "cards.us_cooperation.caption",
            locale,
            &[("value", &format!("{:.1}", US_AID_BILLIONS))],
        )),
        None,
        CardStyle::Alliance,
    ));

    // 第二行：带变化量
    if let (Some(from), Some(to)) = (
        f.first(MetricId::MobilizationDays),
        f.last(MetricId::MobilizationDays),
    ) {
        // 正值表示动员时间缩短
        let reduction = growth_pct(from, to).map(|g| signed(-g));
        cards.push(f.card(
            "mobilization",
            tr_with_args("cards.mobilization.value", locale, &[("value", &format!("{:.1}", to))]),
            since.clone(),
            reduction,
            CardStyle::Plain,
        ));
    }

    if let (Some(from), Some(to)) = (f.first(MetricId::AirCapacity), f.last(MetricId::AirCapacity))
    {
        cards.push(f.card(
            "air_power",
            format!("{:.1}%", to),
            since.clone(),
            growth_pct(from, to).map(signed),
            CardStyle::Plain,
        ));
    }

    if let (Some(from), Some(to)) = (
        f.first(MetricId::MissileDefenseCoverage),
        f.last(MetricId::MissileDefenseCoverage),
    ) {
        cards.push(f.card(
            "missile_coverage",
            format!("{:.1}%", to),
            since.clone(),
            growth_pct(from, to).map(signed),
            CardStyle::Plain,
        ));
    }

    if let (Some(from), Some(to)) = (f.first(MetricId::Readiness), f.last(MetricId::Readiness)) {
        cards.push(f.card(
            "readiness",
            format!("{:.1}%", to),
            since,
            Some(signed(to - from)),
            CardStyle::Plain,
        ));
    }

    cards
}
