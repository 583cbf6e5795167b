// ==========================================
// 战略防务仪表盘 - 命令行入口
// ==========================================
// 用法:
//   defense-posture-dashboard --mode by-branch --item "Marine Israélienne" --format html -o out.html
//   defense-posture-dashboard --list
// 结果写入 --output 或 stdout；日志写 stderr
// ==========================================

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use defense_posture_dashboard::api::{AnalysisMode, DashboardApi, SelectionControls, SimulationScenario};
use defense_posture_dashboard::config::ConfigManager;
use defense_posture_dashboard::domain::types::OutputFormat;
use defense_posture_dashboard::i18n::tr;
use defense_posture_dashboard::{logging, perf, render};

/// 战略防务仪表盘：合成指标并输出 HTML / JSON / CSV
#[derive(Parser, Debug)]
#[command(name = "defense-posture-dashboard", version)]
#[command(about = "Synthetic defense-posture dashboard (HTML / JSON / CSV)")]
struct Args {
    /// 分析模式: overview | by-branch | strategic-programs | security-scenarios
    #[arg(short, long, default_value = "overview")]
    mode: AnalysisMode,

    /// 模式下的选择项（默认取该模式第一项）
    #[arg(short, long)]
    item: Option<String>,

    /// 模拟情景（仅展示）
    #[arg(short, long, default_value = "status-quo")]
    scenario: SimulationScenario,

    /// 隐藏地区背景页
    #[arg(long)]
    no_regional: bool,

    /// 隐藏联盟数据库页
    #[arg(long)]
    no_alliances: bool,

    /// 隐藏技术细节页
    #[arg(long)]
    no_technical: bool,

    /// 隐藏威胁评估页
    #[arg(long)]
    no_threats: bool,

    /// 界面语言（fr | en），默认取配置
    #[arg(short, long)]
    locale: Option<String>,

    /// 输出格式（html | json | csv），默认取配置
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// 输出文件（默认 stdout）
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 配置文件路径
    #[arg(long, env = "DEFENSE_DASHBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// 列出分析模式与选择项后退出
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = ConfigManager::load(args.config.as_deref()).context("无法加载配置")?;
    logging::init_with(config.is_json_logging());
    perf::install();

    tracing::info!(
        version = defense_posture_dashboard::VERSION,
        config = ?config.source(),
        "{} 启动",
        defense_posture_dashboard::APP_NAME
    );

    let api = DashboardApi::from_config(&config).context("配置无效")?;
    let locale = args.locale.clone().unwrap_or_else(|| api.locale().to_string());

    if args.list {
        print_options(&locale)?;
        return Ok(());
    }

    let mut toggles = config.get_display_toggles();
    toggles.show_regional &= !args.no_regional;
    toggles.show_alliances &= !args.no_alliances;
    toggles.show_technical &= !args.no_technical;
    toggles.threat_assessment &= !args.no_threats;

    let mut controls = SelectionControls::new(args.mode)
        .with_scenario(args.scenario)
        .with_toggles(toggles);
    if let Some(item) = args.item {
        controls = controls.with_item(item);
    }

    let format = args.format.unwrap_or_else(|| config.get_output_format());
    let output = render::render(&api, &controls, format, &locale)
        .with_context(|| format!("生成失败: mode={}, item={}", controls.mode, controls.item))?;

    match &args.output {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("无法写入输出文件: {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = output.len(), %format, "输出已写入");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes()).context("无法写入 stdout")?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn print_options(locale: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for (mode, items) in DashboardApi::options() {
        writeln!(stdout, "{} ({})", mode, tr(&mode.label_key(), locale))?;
        for item in items {
            writeln!(stdout, "  - {}", item)?;
        }
    }
    writeln!(stdout)?;
    for scenario in SimulationScenario::ALL {
        writeln!(stdout, "{} ({})", scenario, tr(&scenario.label_key(), locale))?;
    }
    Ok(())
}
