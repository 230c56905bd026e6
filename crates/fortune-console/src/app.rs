// crates/fortune-console/src/app.rs

use std::time::{Duration, Instant};

use copypasta::{ClipboardContext, ClipboardProvider};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use fortune_api::{
    broker_holdings, generate_file_system, generate_strategy, portfolio_holdings,
    portfolio_signals, run_backtest, ApiClient, ApiError,
};
use fortune_core::{format_code, BacktestReport, FileNode, Holding, Signal};

use crate::tree::TreeView;

const EMPTY_PROMPT: &str = "Prompt cannot be empty.";
const AI_DISABLED: &str = "Gemini API is disabled. Enable it with [g].";
const NO_TRADES: &str =
    "Backtest completed with no trades. Try different parameters or a different symbol.";
const STRATEGY_DONE: &str = "Strategy generated successfully!";

const DEFAULT_SCAFFOLD_PROMPT: &str = "Create a new React + TypeScript project titled \
\"Fortune AI Trading System\" with components, pages, services, utils, styles, assets \
and config folders.";
const DEFAULT_STRATEGY_PROMPT: &str =
    "RSI + Bollinger Bands intraday strategy for BTC/USD on a 5-minute chart.";

/// Symbols offered on the backtest page, as (request value, label).
pub const SYMBOLS: [(&str, &str); 2] = [("RELIANCE", "Reliance"), ("TCS", "TCS")];
/// Strategies offered on the backtest page, as (request value, label).
pub const STRATEGIES: [(&str, &str); 2] = [
    ("rsi_bb", "RSI + Bollinger Bands"),
    ("mean_reversion", "Mean Reversion"),
];

pub enum InputMode {
    Normal,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Scaffolder,
    Strategy,
    Backtest,
    Dashboard,
}

impl View {
    pub const ALL: [View; 4] = [
        View::Scaffolder,
        View::Strategy,
        View::Backtest,
        View::Dashboard,
    ];

    pub fn title(self) -> &'static str {
        match self {
            View::Scaffolder => "Project Scaffolder",
            View::Strategy => "Strategy Designer",
            View::Backtest => "Backtest Viewer",
            View::Dashboard => "Portfolio Dashboard",
        }
    }

    pub fn index(self) -> usize {
        match self {
            View::Scaffolder => 0,
            View::Strategy => 1,
            View::Backtest => 2,
            View::Dashboard => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Overview,
    Alerts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Short-lived toast shown on the strategy page.
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub raised_at: Instant,
}

/// A completed backend reply, tagged with the request sequence number it
/// answers. Replies whose number no longer matches the page's latest
/// request are dropped on arrival.
pub enum ApiEvent {
    Scaffold {
        req: u64,
        result: Result<FileNode, ApiError>,
    },
    Strategy {
        req: u64,
        result: Result<String, ApiError>,
    },
    Backtest {
        req: u64,
        result: Result<BacktestReport, ApiError>,
    },
    DashboardData {
        req: u64,
        result: Result<(Vec<Holding>, Vec<Signal>), ApiError>,
    },
    BrokerSync {
        req: u64,
        result: Result<Vec<Holding>, ApiError>,
    },
}

pub struct ScaffolderPage {
    pub prompt: String,
    pub tree: Option<FileNode>,
    pub tree_view: TreeView,
    pub loading: bool,
    pub error: Option<String>,
    pub last_req: u64,
}

impl Default for ScaffolderPage {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_SCAFFOLD_PROMPT.to_string(),
            tree: None,
            tree_view: TreeView::default(),
            loading: false,
            error: None,
            last_req: 0,
        }
    }
}

impl ScaffolderPage {
    pub fn select_next(&mut self) {
        if let Some(tree) = &self.tree {
            self.tree_view.select_next(tree);
        }
    }

    pub fn select_prev(&mut self) {
        self.tree_view.select_prev();
    }

    pub fn toggle_fold(&mut self) {
        if let Some(tree) = &self.tree {
            self.tree_view.toggle_selected(tree);
        }
    }
}

pub struct StrategyPage {
    pub prompt: String,
    pub output: Option<String>,
    pub scroll: u16,
    pub loading: bool,
    pub notice: Option<Notice>,
    pub last_req: u64,
}

impl Default for StrategyPage {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_STRATEGY_PROMPT.to_string(),
            output: None,
            scroll: 0,
            loading: false,
            notice: None,
            last_req: 0,
        }
    }
}

impl StrategyPage {
    pub fn raise_success(&mut self, message: &str) {
        self.notice = Some(Notice {
            message: message.to_string(),
            kind: NoticeKind::Success,
            raised_at: Instant::now(),
        });
    }

    pub fn raise_error(&mut self, message: &str) {
        self.notice = Some(Notice {
            message: message.to_string(),
            kind: NoticeKind::Error,
            raised_at: Instant::now(),
        });
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let Some(output) = &self.output else { return };
        let max = output.lines().count().saturating_sub(1) as u16;
        if self.scroll < max {
            self.scroll += 1;
        }
    }
}

#[derive(Default)]
pub struct BacktestPage {
    pub symbol_index: usize,
    pub strategy_index: usize,
    pub report: Option<BacktestReport>,
    pub selected_trade: usize,
    pub loading: bool,
    pub error: Option<String>,
    pub last_req: u64,
}

impl BacktestPage {
    pub fn symbol(&self) -> (&'static str, &'static str) {
        SYMBOLS[self.symbol_index]
    }

    pub fn strategy(&self) -> (&'static str, &'static str) {
        STRATEGIES[self.strategy_index]
    }

    pub fn next_symbol(&mut self) {
        self.symbol_index = (self.symbol_index + 1) % SYMBOLS.len();
    }

    pub fn next_strategy(&mut self) {
        self.strategy_index = (self.strategy_index + 1) % STRATEGIES.len();
    }

    pub fn select_next_trade(&mut self) {
        let count = self.report.as_ref().map_or(0, |report| report.trades.len());
        if self.selected_trade + 1 < count {
            self.selected_trade += 1;
        }
    }

    pub fn select_prev_trade(&mut self) {
        self.selected_trade = self.selected_trade.saturating_sub(1);
    }
}

#[derive(Default)]
pub struct DashboardPage {
    pub tab: DashboardTab,
    pub holdings: Vec<Holding>,
    pub signals: Vec<Signal>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
    pub syncing: bool,
    pub sync_error: Option<String>,
    pub last_req: u64,
    pub last_sync_req: u64,
}

pub struct App {
    // UI state
    pub view: View,
    pub input_mode: InputMode,
    pub should_quit: bool,
    pub show_help: bool,
    pub ai_enabled: bool,

    // Pages
    pub scaffolder: ScaffolderPage,
    pub strategy: StrategyPage,
    pub backtest: BacktestPage,
    pub dashboard: DashboardPage,

    // Input buffer position, in bytes into the active prompt
    pub input_cursor: usize,

    // Request sequence counter
    pub next_request_id: u64,

    client: ApiClient,
    events_tx: UnboundedSender<ApiEvent>,
}

impl App {
    pub fn new(client: ApiClient, events_tx: UnboundedSender<ApiEvent>) -> Self {
        Self {
            view: View::Scaffolder,
            input_mode: InputMode::Normal,
            should_quit: false,
            show_help: false,
            ai_enabled: true,
            scaffolder: ScaffolderPage::default(),
            strategy: StrategyPage::default(),
            backtest: BacktestPage::default(),
            dashboard: DashboardPage::default(),
            input_cursor: 0,
            next_request_id: 1,
            client,
            events_tx,
        }
    }

    pub fn get_next_request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub fn next_view(&mut self) {
        self.view = match self.view {
            View::Scaffolder => View::Strategy,
            View::Strategy => View::Backtest,
            View::Backtest => View::Dashboard,
            View::Dashboard => View::Scaffolder,
        };
        self.on_view_entered();
    }

    pub fn prev_view(&mut self) {
        self.view = match self.view {
            View::Scaffolder => View::Dashboard,
            View::Strategy => View::Scaffolder,
            View::Backtest => View::Strategy,
            View::Dashboard => View::Backtest,
        };
        self.on_view_entered();
    }

    fn on_view_entered(&mut self) {
        // The dashboard fetches its data the first time it is shown.
        if self.view == View::Dashboard && !self.dashboard.loaded && !self.dashboard.loading {
            self.load_dashboard();
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    pub fn toggle_ai(&mut self) {
        self.ai_enabled = !self.ai_enabled;
    }

    // Prompt editing

    pub fn start_editing(&mut self) {
        let len = match self.view {
            View::Scaffolder => Some(self.scaffolder.prompt.len()),
            View::Strategy => Some(self.strategy.prompt.len()),
            _ => None,
        };
        if let Some(len) = len {
            self.input_cursor = len;
            self.input_mode = InputMode::Editing;
        }
    }

    fn active_prompt_mut(&mut self) -> Option<&mut String> {
        match self.view {
            View::Scaffolder => Some(&mut self.scaffolder.prompt),
            View::Strategy => Some(&mut self.strategy.prompt),
            _ => None,
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor = self.input_cursor;
        let Some(prompt) = self.active_prompt_mut() else {
            return;
        };
        prompt.insert(cursor, c);
        self.input_cursor = cursor + c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if self.input_cursor == 0 {
            return;
        }
        let cursor = self.input_cursor;
        let Some(prompt) = self.active_prompt_mut() else {
            return;
        };
        let start = prompt[..cursor]
            .char_indices()
            .next_back()
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        prompt.remove(start);
        self.input_cursor = start;
    }

    pub fn submit_input(&mut self) {
        self.input_mode = InputMode::Normal;
        match self.view {
            View::Scaffolder => self.submit_scaffold(),
            View::Strategy => self.submit_strategy(),
            _ => {}
        }
    }

    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn copy_prompt(&mut self) {
        let text = self.scaffolder.prompt.clone();
        match ClipboardContext::new() {
            Ok(mut clipboard) => {
                if let Err(err) = clipboard.set_contents(text) {
                    warn!("failed to copy prompt: {err}");
                }
            }
            Err(err) => warn!("clipboard unavailable: {err}"),
        }
    }

    // Request submission

    pub fn submit_scaffold(&mut self) {
        if self.scaffolder.loading {
            return;
        }
        if !self.ai_enabled {
            self.scaffolder.error = Some(AI_DISABLED.to_string());
            return;
        }
        if self.scaffolder.prompt.trim().is_empty() {
            self.scaffolder.error = Some(EMPTY_PROMPT.to_string());
            return;
        }
        self.scaffolder.loading = true;
        self.scaffolder.error = None;
        self.scaffolder.tree = None;
        let req = self.get_next_request_id();
        self.scaffolder.last_req = req;
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        let prompt = self.scaffolder.prompt.clone();
        tokio::spawn(async move {
            let result = generate_file_system(&client, &prompt).await;
            let _ = tx.send(ApiEvent::Scaffold { req, result });
        });
    }

    pub fn submit_strategy(&mut self) {
        if self.strategy.loading {
            return;
        }
        if !self.ai_enabled {
            self.strategy.raise_error(AI_DISABLED);
            return;
        }
        if self.strategy.prompt.trim().is_empty() {
            self.strategy.raise_error(EMPTY_PROMPT);
            return;
        }
        self.strategy.loading = true;
        self.strategy.notice = None;
        self.strategy.output = None;
        self.strategy.scroll = 0;
        let req = self.get_next_request_id();
        self.strategy.last_req = req;
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        let prompt = self.strategy.prompt.clone();
        tokio::spawn(async move {
            let result = generate_strategy(&client, &prompt).await;
            let _ = tx.send(ApiEvent::Strategy { req, result });
        });
    }

    pub fn submit_backtest(&mut self) {
        if self.backtest.loading {
            return;
        }
        self.backtest.loading = true;
        self.backtest.error = None;
        self.backtest.report = None;
        self.backtest.selected_trade = 0;
        let req = self.get_next_request_id();
        self.backtest.last_req = req;
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        let symbol = self.backtest.symbol().0.to_string();
        let strategy = self.backtest.strategy().0.to_string();
        tokio::spawn(async move {
            let result = run_backtest(&client, &symbol, &strategy).await;
            let _ = tx.send(ApiEvent::Backtest { req, result });
        });
    }

    pub fn load_dashboard(&mut self) {
        if self.dashboard.loading {
            return;
        }
        self.dashboard.loading = true;
        self.dashboard.error = None;
        let req = self.get_next_request_id();
        self.dashboard.last_req = req;
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result: Result<_, ApiError> = async {
                let holdings = portfolio_holdings(&client).await?;
                let signals = portfolio_signals(&client).await?;
                Ok((holdings, signals))
            }
            .await;
            let _ = tx.send(ApiEvent::DashboardData { req, result });
        });
    }

    pub fn reload_dashboard(&mut self) {
        if self.dashboard.loading {
            return;
        }
        self.dashboard.loaded = false;
        self.load_dashboard();
    }

    pub fn sync_broker(&mut self) {
        if self.dashboard.syncing {
            return;
        }
        self.dashboard.syncing = true;
        self.dashboard.sync_error = None;
        let req = self.get_next_request_id();
        self.dashboard.last_sync_req = req;
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = broker_holdings(&client).await;
            let _ = tx.send(ApiEvent::BrokerSync { req, result });
        });
    }

    // Reply handling

    pub fn handle_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Scaffold { req, result } => {
                if req != self.scaffolder.last_req {
                    debug!("dropping stale scaffold reply {req}");
                    return;
                }
                self.scaffolder.loading = false;
                match result {
                    Ok(tree) => {
                        self.scaffolder.tree_view = TreeView::default();
                        self.scaffolder.tree = Some(tree);
                    }
                    Err(err) => self.scaffolder.error = Some(err.user_message()),
                }
            }
            ApiEvent::Strategy { req, result } => {
                if req != self.strategy.last_req {
                    debug!("dropping stale strategy reply {req}");
                    return;
                }
                self.strategy.loading = false;
                match result {
                    Ok(text) => {
                        self.strategy.output = Some(format_code(&text));
                        self.strategy.raise_success(STRATEGY_DONE);
                    }
                    Err(err) => {
                        let message = err.user_message();
                        self.strategy.raise_error(&message);
                    }
                }
            }
            ApiEvent::Backtest { req, result } => {
                if req != self.backtest.last_req {
                    debug!("dropping stale backtest reply {req}");
                    return;
                }
                self.backtest.loading = false;
                match result {
                    Ok(report) if report.trades.is_empty() => {
                        self.backtest.error = Some(NO_TRADES.to_string());
                    }
                    Ok(report) => self.backtest.report = Some(report),
                    Err(err) => self.backtest.error = Some(err.user_message()),
                }
            }
            ApiEvent::DashboardData { req, result } => {
                if req != self.dashboard.last_req {
                    debug!("dropping stale dashboard reply {req}");
                    return;
                }
                self.dashboard.loading = false;
                match result {
                    Ok((holdings, signals)) => {
                        self.dashboard.holdings = holdings;
                        self.dashboard.signals = signals;
                        self.dashboard.loaded = true;
                    }
                    Err(err) => self.dashboard.error = Some(err.user_message()),
                }
            }
            ApiEvent::BrokerSync { req, result } => {
                if req != self.dashboard.last_sync_req {
                    debug!("dropping stale broker sync reply {req}");
                    return;
                }
                self.dashboard.syncing = false;
                match result {
                    Ok(holdings) => {
                        self.dashboard.holdings = holdings;
                        self.dashboard.tab = DashboardTab::Overview;
                    }
                    Err(err) => self.dashboard.sync_error = Some(err.user_message()),
                }
            }
        }
    }

    /// Housekeeping between input polls. Currently just expires the
    /// strategy notice after five seconds, matching the toast lifetime.
    pub fn on_tick(&mut self) {
        if let Some(notice) = &self.strategy.notice {
            if notice.raised_at.elapsed() >= Duration::from_secs(5) {
                self.strategy.notice = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fortune_core::{parse_json, EquityPoint, PerformanceMetrics, Trade, TradeDirection};
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    fn test_app() -> (App, UnboundedReceiver<ApiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(ApiClient::new("http://127.0.0.1:9"), tx), rx)
    }

    fn sample_tree() -> FileNode {
        parse_json(
            r#"{"name": "project", "type": "folder", "children": [
                {"name": "src", "type": "folder", "children": [
                    {"name": "main.rs", "type": "file", "content": ""}
                ]}
            ]}"#,
        )
        .unwrap()
    }

    fn sample_report(trade_count: usize) -> BacktestReport {
        let trades = (0..trade_count)
            .map(|i| Trade {
                id: i as u64 + 1,
                date: "2024-03-04".to_string(),
                direction: TradeDirection::Long,
                entry: 100.0,
                exit: 101.0,
                pnl: 1.0,
            })
            .collect();
        BacktestReport {
            trades,
            metrics: PerformanceMetrics {
                total_pnl: trade_count as f64,
                win_rate: 100.0,
                max_drawdown: 0.5,
                sharpe_ratio: 1.2,
                cagr: 10.0,
                equity_curve: vec![EquityPoint {
                    trade: 1,
                    equity: 101.0,
                }],
            },
        }
    }

    fn sample_holdings() -> Vec<Holding> {
        vec![Holding {
            id: "h1".to_string(),
            name: "Reliance Industries".to_string(),
            ticker: "RELIANCE".to_string(),
            quantity: 10.0,
            avg_price: 2800.0,
            current_price: 2950.5,
            value: 29505.0,
            pnl: 1505.0,
        }]
    }

    #[tokio::test]
    async fn views_cycle_forward_and_back() {
        let (mut app, _rx) = test_app();
        assert_eq!(app.view, View::Scaffolder);
        app.next_view();
        assert_eq!(app.view, View::Strategy);
        app.prev_view();
        app.prev_view();
        assert_eq!(app.view, View::Dashboard);
    }

    #[test]
    fn whitespace_prompt_is_rejected_without_a_request() {
        let (mut app, _rx) = test_app();
        app.scaffolder.prompt = "   ".to_string();
        app.submit_scaffold();
        assert_eq!(app.scaffolder.error.as_deref(), Some(EMPTY_PROMPT));
        assert!(!app.scaffolder.loading);
        assert_eq!(app.scaffolder.last_req, 0);

        app.view = View::Strategy;
        app.strategy.prompt.clear();
        app.submit_strategy();
        let notice = app.strategy.notice.as_ref().unwrap();
        assert_eq!(notice.message, EMPTY_PROMPT);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(!app.strategy.loading);
    }

    #[test]
    fn disabled_ai_blocks_generation() {
        let (mut app, _rx) = test_app();
        app.toggle_ai();
        app.submit_scaffold();
        assert_eq!(app.scaffolder.error.as_deref(), Some(AI_DISABLED));
        assert!(!app.scaffolder.loading);

        app.submit_strategy();
        let notice = app.strategy.notice.as_ref().unwrap();
        assert_eq!(notice.message, AI_DISABLED);
    }

    #[test]
    fn scaffold_reply_replaces_tree_and_resets_fold_state() {
        let (mut app, _rx) = test_app();
        app.scaffolder.loading = true;
        app.scaffolder.last_req = 4;
        app.scaffolder.tree_view.selected = 3;
        app.handle_api_event(ApiEvent::Scaffold {
            req: 4,
            result: Ok(sample_tree()),
        });
        assert!(!app.scaffolder.loading);
        assert!(app.scaffolder.tree.is_some());
        assert_eq!(app.scaffolder.tree_view.selected, 0);
    }

    #[test]
    fn stale_scaffold_reply_is_ignored() {
        let (mut app, _rx) = test_app();
        app.scaffolder.loading = true;
        app.scaffolder.last_req = 2;
        app.handle_api_event(ApiEvent::Scaffold {
            req: 1,
            result: Ok(sample_tree()),
        });
        assert!(app.scaffolder.loading);
        assert!(app.scaffolder.tree.is_none());
    }

    #[test]
    fn scaffold_failure_shows_the_service_message() {
        let (mut app, _rx) = test_app();
        app.scaffolder.loading = true;
        app.scaffolder.last_req = 1;
        app.handle_api_event(ApiEvent::Scaffold {
            req: 1,
            result: Err(ApiError::Service(
                "Failed to generate file system. Please check your backend connection."
                    .to_string(),
            )),
        });
        assert!(!app.scaffolder.loading);
        assert_eq!(
            app.scaffolder.error.as_deref(),
            Some("Failed to generate file system. Please check your backend connection.")
        );
    }

    #[test]
    fn backtest_with_no_trades_reports_an_error() {
        let (mut app, _rx) = test_app();
        app.backtest.loading = true;
        app.backtest.last_req = 1;
        app.handle_api_event(ApiEvent::Backtest {
            req: 1,
            result: Ok(sample_report(0)),
        });
        assert_eq!(app.backtest.error.as_deref(), Some(NO_TRADES));
        assert!(app.backtest.report.is_none());
    }

    #[test]
    fn backtest_error_prefers_the_backend_detail() {
        let (mut app, _rx) = test_app();
        app.backtest.loading = true;
        app.backtest.last_req = 1;
        app.handle_api_event(ApiEvent::Backtest {
            req: 1,
            result: Err(ApiError::Network {
                status: 500,
                reason: "Internal Server Error".to_string(),
                detail: Some("symbol not found".to_string()),
            }),
        });
        assert_eq!(app.backtest.error.as_deref(), Some("symbol not found"));
    }

    #[test]
    fn backtest_reply_with_trades_is_kept() {
        let (mut app, _rx) = test_app();
        app.backtest.loading = true;
        app.backtest.last_req = 7;
        app.handle_api_event(ApiEvent::Backtest {
            req: 7,
            result: Ok(sample_report(3)),
        });
        let report = app.backtest.report.as_ref().unwrap();
        assert_eq!(report.trades.len(), 3);
        assert!(app.backtest.error.is_none());
    }

    #[test]
    fn strategy_output_is_pretty_printed_and_announced() {
        let (mut app, _rx) = test_app();
        app.strategy.loading = true;
        app.strategy.last_req = 1;
        app.handle_api_event(ApiEvent::Strategy {
            req: 1,
            result: Ok("```json\n{\"fast\":12}\n```".to_string()),
        });
        assert_eq!(app.strategy.output.as_deref(), Some("{\n  \"fast\": 12\n}"));
        let notice = app.strategy.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, STRATEGY_DONE);
    }

    #[test]
    fn strategy_failure_raises_an_error_notice() {
        let (mut app, _rx) = test_app();
        app.strategy.loading = true;
        app.strategy.last_req = 1;
        app.handle_api_event(ApiEvent::Strategy {
            req: 1,
            result: Err(ApiError::Service(
                "Failed to generate strategy. Please check your backend connection.".to_string(),
            )),
        });
        assert!(app.strategy.output.is_none());
        let notice = app.strategy.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(
            notice.message,
            "Failed to generate strategy. Please check your backend connection."
        );
    }

    #[test]
    fn notices_expire_on_tick() {
        let (mut app, _rx) = test_app();
        app.strategy.raise_success(STRATEGY_DONE);
        app.on_tick();
        assert!(app.strategy.notice.is_some());

        app.strategy.notice.as_mut().unwrap().raised_at =
            Instant::now() - Duration::from_secs(6);
        app.on_tick();
        assert!(app.strategy.notice.is_none());
    }

    #[test]
    fn broker_sync_replaces_holdings_and_shows_overview() {
        let (mut app, _rx) = test_app();
        app.dashboard.tab = DashboardTab::Alerts;
        app.dashboard.syncing = true;
        app.dashboard.last_sync_req = 3;
        app.handle_api_event(ApiEvent::BrokerSync {
            req: 3,
            result: Ok(sample_holdings()),
        });
        assert!(!app.dashboard.syncing);
        assert_eq!(app.dashboard.tab, DashboardTab::Overview);
        assert_eq!(app.dashboard.holdings.len(), 1);
        assert_eq!(app.dashboard.holdings[0].ticker, "RELIANCE");
    }

    #[test]
    fn failed_broker_sync_keeps_current_holdings() {
        let (mut app, _rx) = test_app();
        app.dashboard.holdings = sample_holdings();
        app.dashboard.tab = DashboardTab::Alerts;
        app.dashboard.syncing = true;
        app.dashboard.last_sync_req = 3;
        app.handle_api_event(ApiEvent::BrokerSync {
            req: 3,
            result: Err(ApiError::Network {
                status: 502,
                reason: "Bad Gateway".to_string(),
                detail: Some("broker session expired".to_string()),
            }),
        });
        assert_eq!(app.dashboard.sync_error.as_deref(), Some("broker session expired"));
        assert_eq!(app.dashboard.holdings.len(), 1);
        assert_eq!(app.dashboard.tab, DashboardTab::Alerts);
    }

    #[test]
    fn stale_broker_sync_is_ignored() {
        let (mut app, _rx) = test_app();
        app.dashboard.syncing = true;
        app.dashboard.last_sync_req = 5;
        app.handle_api_event(ApiEvent::BrokerSync {
            req: 4,
            result: Ok(sample_holdings()),
        });
        assert!(app.dashboard.syncing);
        assert!(app.dashboard.holdings.is_empty());
    }

    #[test]
    fn dashboard_load_failure_leaves_it_unloaded() {
        let (mut app, _rx) = test_app();
        app.dashboard.loading = true;
        app.dashboard.last_req = 2;
        app.handle_api_event(ApiEvent::DashboardData {
            req: 2,
            result: Err(ApiError::Parse("expected JSON".to_string())),
        });
        assert!(!app.dashboard.loading);
        assert!(!app.dashboard.loaded);
        assert!(app.dashboard.error.is_some());
    }

    #[tokio::test]
    async fn entering_the_dashboard_loads_it_once() {
        let (mut app, _rx) = test_app();
        app.next_view();
        app.next_view();
        app.next_view();
        assert_eq!(app.view, View::Dashboard);
        assert!(app.dashboard.loading);
        let first_req = app.dashboard.last_req;
        assert!(first_req > 0);

        // Leaving and returning while the load is in flight does not
        // start another one.
        app.next_view();
        app.next_view();
        app.next_view();
        app.next_view();
        assert_eq!(app.view, View::Dashboard);
        assert_eq!(app.dashboard.last_req, first_req);
    }

    #[test]
    fn editing_inserts_and_deletes_at_the_cursor() {
        let (mut app, _rx) = test_app();
        app.scaffolder.prompt.clear();
        app.start_editing();
        assert!(matches!(app.input_mode, InputMode::Editing));
        app.enter_char('a');
        app.enter_char('é');
        app.enter_char('b');
        assert_eq!(app.scaffolder.prompt, "aéb");
        app.delete_char();
        app.delete_char();
        assert_eq!(app.scaffolder.prompt, "a");
        assert_eq!(app.input_cursor, 1);
        app.cancel_input();
        assert!(matches!(app.input_mode, InputMode::Normal));
    }
}
