//! End-to-end flows across the intake, preview and session components.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use bytes::Bytes;
use resumind_core::intake::{ClickTarget, MAX_UPLOAD_BYTES, Propagation};
use resumind_core::preview::{PreviewError, fetch_preview};
use resumind_core::route::AuthPage;
use resumind_core::session::{InMemoryAuthService, NavAffordances};
use resumind_core::store::MemoryContentStore;
use resumind_core::{
    AuthService, ConfirmationState, ContentStore, DroppedFile, LayerStack, PreviewFactory,
    PreviewResolver, PreviewState, ResumeId, ResumeSummary, Route, SessionGate, UploadIntake,
};

#[derive(Default)]
struct Reports(Vec<Option<String>>);

impl resumind_core::SelectionListener for Reports {
    fn on_file_selected(&mut self, file: Option<&DroppedFile>) {
        self.0.push(file.map(|f| f.name.clone()));
    }
}

#[derive(Default)]
struct Handles {
    live: usize,
}

impl PreviewFactory for Handles {
    type Resource = Bytes;

    fn create(&mut self, bytes: Bytes) -> Result<Bytes, PreviewError> {
        self.live += 1;
        Ok(bytes)
    }

    fn release(&mut self, _resource: Bytes) {
        self.live -= 1;
    }
}

#[test]
fn upload_scenario_with_oversized_small_and_wrong_type_files() {
    let mut intake = UploadIntake::new(Reports::default());

    let big = DroppedFile::new("big.pdf", 25 * 1024 * 1024, "application/pdf");
    intake.drop_files(vec![big]);
    assert!(intake.selection().is_none());
    assert_eq!(
        intake.rejection_message().as_deref(),
        Some("File is larger than 20 MB")
    );

    let small = DroppedFile::new("cv.pdf", 1024 * 1024, "application/pdf");
    intake.drop_files(vec![small]);
    assert_eq!(intake.selection().unwrap().name, "cv.pdf");
    assert!(intake.rejection_message().is_none());

    let image = DroppedFile::new("photo.png", 2048, "image/png");
    intake.drop_files(vec![image]);
    assert_eq!(intake.selection().unwrap().name, "cv.pdf");
    assert!(intake.rejection_message().is_some());

    assert_eq!(intake.click(ClickTarget::ClearControl), Propagation::Stop);
    assert!(!intake.is_picker_open());
    assert!(intake.selection().is_none());

    assert_eq!(
        intake.listener().0,
        vec![Some("cv.pdf".to_string()), None]
    );
}

#[test]
fn exactly_the_limit_is_accepted() {
    let mut intake = UploadIntake::new(Reports::default());
    intake.drop_files(vec![DroppedFile::new("max.pdf", MAX_UPLOAD_BYTES, "application/pdf")]);
    assert!(intake.selection().is_some());
}

#[tokio::test]
async fn resume_cards_resolve_previews_from_store() {
    let store = Arc::new(MemoryContentStore::new());
    store.insert("/images/r1.png", &b"first"[..]);
    store.insert("/images/r1-v2.png", &b"second"[..]);
    let store: Arc<dyn ContentStore> = store;

    let resumes = [
        ResumeSummary::new("r1", 82.0, "/images/r1.png").with_company("Acme"),
        ResumeSummary::new("r2", 40.5, "/images/missing.png"),
    ];

    let mut resolver = PreviewResolver::new(Handles::default());
    for resume in &resumes {
        let ticket = resolver.request(&resume.id, &resume.image_path).unwrap();
        let (ticket, result) = fetch_preview(Arc::clone(&store), ticket).await;
        resolver.settle(&ticket, result);
    }

    let r1 = ResumeId::new("r1");
    let r2 = ResumeId::new("r2");
    assert_eq!(
        resolver.state(&r1).and_then(PreviewState::resource),
        Some(&Bytes::from_static(b"first"))
    );
    assert_eq!(resolver.state(&r2), Some(&PreviewState::Missing));

    let ticket = resolver.request(&r1, "/images/r1-v2.png").unwrap();
    let (ticket, result) = fetch_preview(Arc::clone(&store), ticket).await;
    resolver.settle(&ticket, result);

    assert_eq!(resolver.live_resources(), 1);
    assert_eq!(resolver.factory().live, 1);

    resolver.retain(|id| id != &r1);
    assert_eq!(resolver.factory().live, 0);
}

#[tokio::test]
async fn sign_out_lands_on_auth_page_with_root_target() {
    let service = Arc::new(InMemoryAuthService::new(true));
    let layers = LayerStack::new();
    let mut gate = SessionGate::new(layers.clone());

    assert!(NavAffordances::for_session(service.is_authenticated()).logout);

    gate.request_logout(service.is_authenticated()).unwrap();
    assert!(layers.scroll_locked());
    gate.confirm().unwrap();
    assert_eq!(gate.state(), ConfirmationState::InFlight);
    assert!(!layers.scroll_locked());

    let route = gate.settle_sign_out(service.sign_out().await).unwrap();
    assert_eq!(route.to_path(), "/auth?next=/");

    let Route::Auth { next } = Route::from_path(&route.to_path()) else {
        panic!("expected auth route");
    };
    let page = AuthPage::new(next);
    assert_eq!(page.redirect(service.is_authenticated()), None);

    service.sign_in().await.unwrap();
    assert_eq!(page.redirect(service.is_authenticated()), Some(Route::Home));
    assert!(!NavAffordances::for_session(false).logout);
}
