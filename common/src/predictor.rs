//! アップロード→予測→表示の状態機械
//!
//! 状態遷移:
//! - Idle → (ファイル選択) → Idle
//! - Idle/Failed → (送信・ファイルあり) → InFlight
//! - Idle/Failed → (送信・ファイルなし) → 変化なし（警告）
//! - InFlight → (成功) → Succeeded
//! - InFlight → (失敗) → Failed（選択ファイルは保持）
//! - Succeeded → (リセット) → Idle（結果・ファイルをクリア）
//!
//! 表示はすべて `view()` から導出する。結果ビューはSucceeded以外では返らない。

use log::{debug, warn};

use crate::advisory::{advisory_for, Advisory};
use crate::error::{Error, Result, TransportError};
use crate::parser::validate_prediction;
use crate::service::PredictionService;
use crate::types::{Category, PredictionResult, RequestStatus, SelectedFile};

/// ユーザーに表示する通知
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// 入力不足（ブロッキング表示）
    Warning(Error),
    /// 通信失敗（閉じられる表示）
    Failure(TransportError),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Warning(e) => e.to_string(),
            Notice::Failure(_) => "Error uploading file. Please try again.".to_string(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Notice::Failure(_))
    }
}

/// 送信時点の入力スナップショット
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    pub ticket: u64,
    pub file: SelectedFile,
    pub category: Category,
}

/// 表示中のビュー（常にどちらか一方）
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Input {
        file: Option<&'a SelectedFile>,
        category: Category,
        busy: bool,
    },
    Result {
        result: &'a PredictionResult,
        confidence: String,
        advisory: &'static Advisory,
    },
}

impl View<'_> {
    pub fn is_result(&self) -> bool {
        matches!(self, View::Result { .. })
    }
}

/// アップロード予測コントローラ
#[derive(Debug, Clone, Default)]
pub struct UploadPredictor {
    selected_file: Option<SelectedFile>,
    category: Category,
    status: RequestStatus,
    result: Option<PredictionResult>,
    notice: Option<Notice>,
    next_ticket: u64,
    awaiting: Option<u64>,
    /// 送信後にファイルが差し替えられた
    superseded: bool,
}

impl UploadPredictor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(category: Category) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// 送信ボタンを無効化すべきか
    pub fn is_busy(&self) -> bool {
        self.status == RequestStatus::InFlight
    }

    /// ファイルを選択（置き換え）
    ///
    /// 失敗しない。以前の結果は破棄する。送信中なら応答待ちは継続し、
    /// 届いた応答は破棄してIdleに戻る。
    pub fn select_file(&mut self, file: SelectedFile) {
        debug!("select_file: {:?} (status: {})", file, self.status);
        self.selected_file = Some(file);
        self.result = None;
        self.notice = None;
        match self.status {
            RequestStatus::InFlight => self.superseded = true,
            RequestStatus::Succeeded | RequestStatus::Failed => self.status = RequestStatus::Idle,
            RequestStatus::Idle => {}
        }
    }

    /// カテゴリを選択（次回送信から有効）
    pub fn select_category(&mut self, category: Category) {
        debug!("select_category: {}", category);
        self.category = category;
    }

    /// 送信
    ///
    /// 成功時は同期的にInFlightへ遷移し、サービスへ渡すリクエストを返す。
    /// ファイル未選択なら警告を出して状態は変えない。
    pub fn submit(&mut self) -> Result<PredictionRequest> {
        match self.status {
            RequestStatus::InFlight => {
                warn!("submit rejected: request already in flight");
                return Err(Error::RequestInFlight);
            }
            RequestStatus::Succeeded => {
                return Err(Error::InvalidTransition {
                    action: "submit",
                    status: self.status,
                });
            }
            RequestStatus::Idle | RequestStatus::Failed => {}
        }

        let Some(file) = self.selected_file.clone() else {
            warn!("submit rejected: no file selected");
            self.notice = Some(Notice::Warning(Error::NoFileSelected));
            return Err(Error::NoFileSelected);
        };

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.awaiting = Some(ticket);
        self.superseded = false;
        self.notice = None;
        self.status = RequestStatus::InFlight;
        debug!("submit: ticket {} ({:?}, category: {})", ticket, file, self.category);

        Ok(PredictionRequest {
            ticket,
            file,
            category: self.category,
        })
    }

    /// 応答を反映
    ///
    /// # Returns
    /// 応答を状態に反映した場合true、古い応答として破棄した場合false
    pub fn complete(
        &mut self,
        ticket: u64,
        outcome: std::result::Result<PredictionResult, TransportError>,
    ) -> bool {
        if self.status != RequestStatus::InFlight || self.awaiting != Some(ticket) {
            warn!("complete: discarding response for ticket {}", ticket);
            return false;
        }
        self.awaiting = None;

        if self.superseded {
            debug!("complete: ticket {} superseded by a new file", ticket);
            self.superseded = false;
            self.status = RequestStatus::Idle;
            return false;
        }

        match outcome.and_then(validate_prediction) {
            Ok(result) => {
                debug!("complete: ticket {} -> {:?}", ticket, result);
                self.result = Some(result);
                self.status = RequestStatus::Succeeded;
            }
            Err(e) => {
                warn!("complete: ticket {} failed: {}", ticket, e);
                self.notice = Some(Notice::Failure(e));
                self.status = RequestStatus::Failed;
            }
        }
        true
    }

    /// 結果表示から入力表示に戻す（ファイルもクリア）
    pub fn reset(&mut self) -> Result<()> {
        if self.status != RequestStatus::Succeeded {
            return Err(Error::InvalidTransition {
                action: "reset",
                status: self.status,
            });
        }
        debug!("reset");
        self.selected_file = None;
        self.result = None;
        self.notice = None;
        self.status = RequestStatus::Idle;
        Ok(())
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// 現在の状態から表示ビューを導出
    pub fn view(&self) -> View<'_> {
        match (&self.status, &self.result) {
            (RequestStatus::Succeeded, Some(result)) => View::Result {
                result,
                confidence: result.confidence_text(),
                advisory: advisory_for(&result.health_label),
            },
            _ => View::Input {
                file: self.selected_file.as_ref(),
                category: self.category,
                busy: self.is_busy(),
            },
        }
    }

    /// 送信→予測→反映を1回実行
    ///
    /// # Returns
    /// * `Ok(RequestStatus)` - 反映後の状態（SucceededまたはFailed）
    /// * `Err` - 送信できなかった場合（ファイル未選択など）
    pub async fn submit_with<S: PredictionService>(
        &mut self,
        service: &S,
    ) -> Result<RequestStatus> {
        let request = self.submit()?;
        let outcome = service.predict(&request).await;
        self.complete(request.ticket, outcome);
        Ok(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory::UNKNOWN;
    use crate::types::HealthLabel;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    fn leaf(name: &str) -> SelectedFile {
        SelectedFile::new(name, "image/jpeg", vec![0xFF, 0xD8, 0xFF])
    }

    /// 呼び出し回数を数えるモックサービス
    struct MockService {
        calls: Cell<usize>,
        last: RefCell<Option<PredictionRequest>>,
        outcome: std::result::Result<PredictionResult, TransportError>,
    }

    impl MockService {
        fn new(outcome: std::result::Result<PredictionResult, TransportError>) -> Self {
            Self {
                calls: Cell::new(0),
                last: RefCell::new(None),
                outcome,
            }
        }
    }

    impl PredictionService for MockService {
        async fn predict(
            &self,
            request: &PredictionRequest,
        ) -> std::result::Result<PredictionResult, TransportError> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(request.clone());
            self.outcome.clone()
        }
    }

    #[test]
    fn test_initial_state() {
        let predictor = UploadPredictor::new();
        assert_eq!(predictor.status(), RequestStatus::Idle);
        assert_eq!(predictor.category(), Category::Common);
        assert!(predictor.selected_file().is_none());
        assert!(predictor.result().is_none());
        assert!(!predictor.view().is_result());
    }

    #[test]
    fn test_select_file_always_clears_result() {
        let mut predictor = UploadPredictor::new();
        let service = MockService::new(Ok(PredictionResult::new("Healthy", 0.97)));

        for name in ["a.jpg", "b.png", "c.txt"] {
            predictor.select_file(leaf(name));
            assert!(predictor.result().is_none());
            assert_eq!(predictor.selected_file().unwrap().name, name);

            block_on(predictor.submit_with(&service)).expect("送信失敗");
            assert!(predictor.result().is_some());
        }

        predictor.select_file(leaf("d.jpg"));
        assert!(predictor.result().is_none());
        assert_eq!(predictor.status(), RequestStatus::Idle);
    }

    #[test]
    fn test_submit_without_file_is_rejected() {
        let mut predictor = UploadPredictor::new();
        let service = MockService::new(Ok(PredictionResult::new("Healthy", 0.97)));

        let err = block_on(predictor.submit_with(&service)).unwrap_err();
        assert_eq!(err, Error::NoFileSelected);
        assert_eq!(predictor.status(), RequestStatus::Idle);
        assert_eq!(service.calls.get(), 0);
        assert_eq!(
            predictor.notice(),
            Some(&Notice::Warning(Error::NoFileSelected))
        );
    }

    #[test]
    fn test_retry_after_failure_without_reselecting() {
        let mut predictor = UploadPredictor::new();
        predictor.select_file(leaf("leaf.jpg"));
        let request = predictor.submit().unwrap();
        predictor.complete(request.ticket, Err(TransportError::Status(500)));
        assert_eq!(predictor.status(), RequestStatus::Failed);

        // ファイルは保持されているので再送信できる
        assert!(predictor.submit().is_ok());
    }

    #[test]
    fn test_submit_transitions_to_in_flight_synchronously() {
        let mut predictor = UploadPredictor::new();
        predictor.select_file(leaf("leaf.jpg"));

        let request = predictor.submit().expect("送信失敗");
        assert_eq!(predictor.status(), RequestStatus::InFlight);
        assert!(predictor.is_busy());
        assert_eq!(request.file.name, "leaf.jpg");

        // 入力ビューのまま、送信中表示
        match predictor.view() {
            View::Input { busy, .. } => assert!(busy),
            View::Result { .. } => panic!("送信中に結果ビュー"),
        }
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let mut predictor = UploadPredictor::new();
        predictor.select_file(leaf("leaf.jpg"));
        predictor.submit().unwrap();

        assert_eq!(predictor.submit().unwrap_err(), Error::RequestInFlight);
        assert_eq!(predictor.status(), RequestStatus::InFlight);
    }

    #[test]
    fn test_submit_issues_exactly_one_request() {
        let mut predictor = UploadPredictor::new();
        let service = MockService::new(Ok(PredictionResult::new("Healthy", 0.97)));
        predictor.select_file(leaf("leaf.jpg"));
        predictor.select_category(Category::Potato);

        block_on(predictor.submit_with(&service)).unwrap();
        assert_eq!(service.calls.get(), 1);

        let last = service.last.borrow();
        let last = last.as_ref().unwrap();
        assert_eq!(last.category, Category::Potato);
        assert_eq!(last.file.name, "leaf.jpg");
    }

    #[test]
    fn test_healthy_response_renders_result_view() {
        let mut predictor = UploadPredictor::new();
        let service = MockService::new(Ok(PredictionResult::new("Healthy", 0.97)));
        predictor.select_file(leaf("leaf.jpg"));

        let status = block_on(predictor.submit_with(&service)).unwrap();
        assert_eq!(status, RequestStatus::Succeeded);

        match predictor.view() {
            View::Result {
                result,
                confidence,
                advisory,
            } => {
                assert_eq!(result.health_label, "Healthy");
                assert_eq!(confidence, "97%");
                assert_eq!(advisory, HealthLabel::Healthy.advisory());
            }
            View::Input { .. } => panic!("結果ビューになっていない"),
        }
    }

    #[test]
    fn test_unknown_label_uses_fallback_advisory() {
        let mut predictor = UploadPredictor::new();
        let service = MockService::new(Ok(PredictionResult::new("Mosaic Virus", 0.61)));
        predictor.select_file(leaf("leaf.jpg"));

        block_on(predictor.submit_with(&service)).unwrap();
        match predictor.view() {
            View::Result { advisory, .. } => assert_eq!(advisory, &UNKNOWN),
            View::Input { .. } => panic!("結果ビューになっていない"),
        }
    }

    #[test]
    fn test_transport_failure_keeps_file() {
        let mut predictor = UploadPredictor::new();
        let service = MockService::new(Err(TransportError::Network("connection refused".into())));
        predictor.select_file(leaf("leaf.jpg"));

        let status = block_on(predictor.submit_with(&service)).unwrap();
        assert_eq!(status, RequestStatus::Failed);
        assert!(predictor.result().is_none());
        assert_eq!(predictor.selected_file().unwrap().name, "leaf.jpg");

        let notice = predictor.notice().expect("通知なし");
        assert!(notice.is_failure());
        assert_eq!(notice.message(), "Error uploading file. Please try again.");
        assert!(!predictor.view().is_result());

        predictor.dismiss_notice();
        assert!(predictor.notice().is_none());
        assert_eq!(predictor.status(), RequestStatus::Failed);
    }

    #[test]
    fn test_out_of_range_confidence_is_failure() {
        let mut predictor = UploadPredictor::new();
        let service = MockService::new(Ok(PredictionResult::new("Healthy", 97.0)));
        predictor.select_file(leaf("leaf.jpg"));

        let status = block_on(predictor.submit_with(&service)).unwrap();
        assert_eq!(status, RequestStatus::Failed);
        assert!(predictor.result().is_none());
    }

    #[test]
    fn test_reset_clears_result_and_file() {
        let mut predictor = UploadPredictor::new();
        let service = MockService::new(Ok(PredictionResult::new("Late Blight", 0.88)));
        predictor.select_file(leaf("leaf.jpg"));
        predictor.select_category(Category::Tomato);
        block_on(predictor.submit_with(&service)).unwrap();

        predictor.reset().expect("リセット失敗");
        assert_eq!(predictor.status(), RequestStatus::Idle);
        assert!(predictor.result().is_none());
        assert!(predictor.selected_file().is_none());
        // カテゴリはユーザー選択のまま
        assert_eq!(predictor.category(), Category::Tomato);
        assert!(!predictor.view().is_result());
    }

    #[test]
    fn test_reset_only_valid_with_result() {
        let mut predictor = UploadPredictor::new();
        assert!(matches!(
            predictor.reset(),
            Err(Error::InvalidTransition { action: "reset", .. })
        ));

        predictor.select_file(leaf("leaf.jpg"));
        let request = predictor.submit().unwrap();
        assert!(predictor.reset().is_err());
        predictor.complete(request.ticket, Err(TransportError::Status(502)));
        assert!(predictor.reset().is_err());
        assert!(predictor.selected_file().is_some());
    }

    #[test]
    fn test_submit_after_success_is_invalid() {
        let mut predictor = UploadPredictor::new();
        let service = MockService::new(Ok(PredictionResult::new("Healthy", 0.9)));
        predictor.select_file(leaf("leaf.jpg"));
        block_on(predictor.submit_with(&service)).unwrap();

        assert!(matches!(
            predictor.submit(),
            Err(Error::InvalidTransition { action: "submit", .. })
        ));
        assert_eq!(service.calls.get(), 1);
    }

    #[test]
    fn test_category_change_applies_to_next_submit_only() {
        let mut predictor = UploadPredictor::new();
        predictor.select_file(leaf("leaf.jpg"));
        predictor.select_category(Category::Potato);

        let request = predictor.submit().unwrap();
        predictor.select_category(Category::Pepper);
        assert_eq!(request.category, Category::Potato);

        predictor.complete(request.ticket, Err(TransportError::Status(503)));
        let retry = predictor.submit().unwrap();
        assert_eq!(retry.category, Category::Pepper);
    }

    #[test]
    fn test_file_selected_while_in_flight_discards_response() {
        let mut predictor = UploadPredictor::new();
        predictor.select_file(leaf("old.jpg"));
        let request = predictor.submit().unwrap();

        predictor.select_file(leaf("new.jpg"));
        // 応答待ちは継続（同時リクエストは1つまで）
        assert_eq!(predictor.status(), RequestStatus::InFlight);
        assert_eq!(predictor.submit().unwrap_err(), Error::RequestInFlight);

        let applied =
            predictor.complete(request.ticket, Ok(PredictionResult::new("Healthy", 0.97)));
        assert!(!applied);
        assert_eq!(predictor.status(), RequestStatus::Idle);
        assert!(predictor.result().is_none());
        assert_eq!(predictor.selected_file().unwrap().name, "new.jpg");
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut predictor = UploadPredictor::new();
        predictor.select_file(leaf("leaf.jpg"));
        let first = predictor.submit().unwrap();
        predictor.complete(first.ticket, Err(TransportError::Status(500)));

        let second = predictor.submit().unwrap();
        assert_ne!(first.ticket, second.ticket);

        // 既に反映済みのチケット
        assert!(!predictor.complete(first.ticket, Ok(PredictionResult::new("Healthy", 0.9))));
        assert_eq!(predictor.status(), RequestStatus::InFlight);

        assert!(predictor.complete(second.ticket, Ok(PredictionResult::new("Healthy", 0.9))));
        assert_eq!(predictor.status(), RequestStatus::Succeeded);
    }

    #[test]
    fn test_new_submit_clears_failure_notice() {
        let mut predictor = UploadPredictor::new();
        predictor.select_file(leaf("leaf.jpg"));
        let request = predictor.submit().unwrap();
        predictor.complete(request.ticket, Err(TransportError::Status(500)));
        assert!(predictor.notice().is_some());

        predictor.submit().unwrap();
        assert!(predictor.notice().is_none());
    }
}
