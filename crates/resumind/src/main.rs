//! `Resumind` - desktop client for resume feedback
//!
//! Stages a PDF for submission, lists submitted resumes with their preview
//! images, and guards sign-out behind a confirmation.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use iced::keyboard::{self, Key};
use iced::widget::{column, container, text};
use iced::{Element, Event, Length, Subscription, Task, event, window};
use resumind_core::intake::{ClickTarget, Propagation};
use resumind_core::preview::{ResolveTicket, fetch_preview};
use resumind_core::route::{AuthPage, AuthStatus};
use resumind_core::session::{InMemoryAuthService, NavAffordances};
use resumind_core::store::DirectoryContentStore;
use resumind_core::{
    AuthService, ContentStore, DroppedFile, LayerStack, PreviewResolver, ResumeId, ResumeSummary,
    Route, SessionGate, UploadIntake,
};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use message::Message;
use model::{AppSettings, DropBatch, DropProgress, ImageFactory, StagedUpload};
use style::widgets::{page_style, palette, rejection_style};

/// How long to wait for the rest of a drop whose file count is unknown.
const DROP_SETTLE: Duration = Duration::from_millis(60);

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resumind=debug,resumind_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resumind");

    iced::application(Resumind::new, Resumind::update, Resumind::view)
        .title("Resumind")
        .subscription(Resumind::subscription)
        .run()
}

/// Main application state.
struct Resumind {
    /// Current page.
    route: Route,
    /// Persisted settings.
    settings: AppSettings,
    /// Content store holding preview images.
    store: Arc<dyn ContentStore>,
    /// Authentication service.
    auth: Arc<dyn AuthService>,
    /// Whether the initial session check finished.
    session_known: bool,
    /// Last observed session state.
    authenticated: bool,
    /// Whether a sign-in is in progress.
    signing_in: bool,
    /// Sign-out confirmation.
    gate: SessionGate,
    /// Sign-in page state while on the auth route.
    auth_page: Option<AuthPage>,
    /// Upload surface.
    intake: UploadIntake<StagedUpload>,
    /// Window drop events of the current drop.
    drop_batch: DropBatch,
    /// Path typed into the picker.
    picker_path: String,
    /// Submitted resumes, newest first.
    resumes: Vec<ResumeSummary>,
    /// Preview images of the displayed resumes.
    previews: PreviewResolver<ImageFactory>,
    /// Error message to display.
    error_message: Option<String>,
}

impl Resumind {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let settings = AppSettings::default();
        palette::set_theme(settings.theme_mode);

        let app = Self {
            route: Route::Home,
            store: Arc::new(DirectoryContentStore::new(settings.content_dir.clone())),
            settings,
            auth: Arc::new(InMemoryAuthService::new(false)),
            session_known: false,
            authenticated: false,
            signing_in: false,
            gate: SessionGate::new(LayerStack::new()),
            auth_page: None,
            intake: UploadIntake::new(StagedUpload::default()),
            drop_batch: DropBatch::default(),
            picker_path: String::new(),
            resumes: Vec::new(),
            previews: PreviewResolver::new(ImageFactory::default()),
            error_message: None,
        };

        let path = model::settings_path();
        let settings_task = Task::perform(
            async move {
                model::load_settings(&path)
                    .await
                    .map_err(|e| format!("{e:#}"))
            },
            Message::SettingsLoaded,
        );
        let auth = Arc::clone(&app.auth);
        let session_task = Task::perform(
            async move { auth.is_authenticated() },
            Message::SessionChecked,
        );
        (app, Task::batch([settings_task, session_task]))
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    #[allow(clippy::too_many_lines)] // Large match is idiomatic for Elm architecture
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => return self.navigate(route),
            Message::SettingsLoaded(result) => {
                match result {
                    Ok(settings) => {
                        info!("Settings loaded: theme={:?}", settings.theme_mode);
                        palette::set_theme(settings.theme_mode);
                        self.store =
                            Arc::new(DirectoryContentStore::new(settings.content_dir.clone()));
                        self.settings = settings;
                    }
                    Err(e) => {
                        info!("Failed to load settings, using defaults: {}", e);
                    }
                }
                let catalog = self.settings.catalog_path();
                return Task::perform(
                    async move {
                        resumind_core::model::load_catalog(&catalog)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::CatalogLoaded,
                );
            }
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    self.error_message = Some(format!("Failed to save settings: {e}"));
                }
            }
            Message::ToggleTheme => {
                self.settings.theme_mode = self.settings.theme_mode.toggled();
                palette::set_theme(self.settings.theme_mode);
                let settings = self.settings.clone();
                let path = model::settings_path();
                return Task::perform(
                    async move {
                        model::save_settings(&path, &settings)
                            .await
                            .map_err(|e| format!("{e:#}"))
                    },
                    Message::SettingsSaved,
                );
            }
            Message::SessionChecked(authenticated) => {
                self.session_known = true;
                self.authenticated = authenticated;
                debug!("Session checked: authenticated={}", authenticated);
                return self.follow_session();
            }
            Message::SignIn => {
                self.signing_in = true;
                let auth = Arc::clone(&self.auth);
                return Task::perform(
                    async move { auth.sign_in().await.map_err(|e| e.to_string()) },
                    Message::SignedIn,
                );
            }
            Message::SignedIn(result) => {
                self.signing_in = false;
                self.authenticated = self.auth.is_authenticated();
                if let Err(e) = result {
                    warn!("Sign-in failed: {}", e);
                    self.set_auth_notice(Some(e));
                    return Task::none();
                }
                return self.follow_session();
            }
            Message::AuthPageSignOut => {
                let auth = Arc::clone(&self.auth);
                return Task::perform(
                    async move { auth.sign_out().await.map_err(|e| e.to_string()) },
                    Message::AuthPageSignedOut,
                );
            }
            Message::AuthPageSignedOut(result) => {
                self.authenticated = self.auth.is_authenticated();
                self.set_auth_notice(result.err());
            }
            Message::RequestLogout => {
                if let Err(e) = self.gate.request_logout(self.authenticated) {
                    warn!("Log out unavailable: {}", e);
                    return Task::none();
                }
                self.drop_batch.leave();
                self.intake.drag_leave();
            }
            Message::CancelLogout(reason) => {
                if let Err(e) = self.gate.cancel(reason) {
                    debug!("Ignoring cancel: {}", e);
                }
            }
            Message::EscapePressed => {
                self.gate.handle_escape();
            }
            Message::ConfirmLogout => {
                if let Err(e) = self.gate.confirm() {
                    warn!("Ignoring confirm: {}", e);
                    return Task::none();
                }
                let auth = Arc::clone(&self.auth);
                return Task::perform(
                    async move { auth.sign_out().await.map_err(|e| e.to_string()) },
                    Message::SignOutSettled,
                );
            }
            Message::SignOutSettled(result) => match self.gate.settle_sign_out(result) {
                Ok(route) => {
                    self.authenticated = self.auth.is_authenticated();
                    return self.navigate(route);
                }
                Err(e) => warn!("Dropping sign-out result: {}", e),
            },
            Message::CatalogLoaded(result) => match result {
                Ok(resumes) => {
                    info!("Loaded {} resumes", resumes.len());
                    self.resumes = resumes;
                    return self.sync_previews();
                }
                Err(e) => {
                    self.error_message = Some(format!("Failed to load resumes: {e}"));
                }
            },
            Message::PreviewFetched(ticket, result) => {
                self.previews.settle(&ticket, result);
                debug!("{} preview handles live", self.previews.factory().live());
            }
            Message::RetryPreview(id) => {
                if let Some(ticket) = self.previews.retry(&id) {
                    return self.fetch(ticket);
                }
            }
            Message::FileHovered => {
                if !accepts_drops(&self.route, self.gate.is_open()) {
                    return Task::none();
                }
                let first = !self.drop_batch.is_hovering();
                self.drop_batch.hover();
                if first {
                    self.intake.drag_enter();
                }
            }
            Message::FilesHoveredLeft => {
                self.drop_batch.leave();
                self.intake.drag_leave();
            }
            Message::FileDropped(path) => {
                if !accepts_drops(&self.route, self.gate.is_open()) {
                    debug!("Ignoring drop of {:?}", path);
                    self.drop_batch.leave();
                    return Task::none();
                }
                match self.drop_batch.drop_path(path) {
                    DropProgress::Started => {
                        return Task::perform(tokio::time::sleep(DROP_SETTLE), |()| {
                            Message::FlushDrop
                        });
                    }
                    DropProgress::Pending => {}
                    DropProgress::Complete(paths) => return build_candidates(paths),
                }
            }
            Message::FlushDrop => {
                let accepting = accepts_drops(&self.route, self.gate.is_open());
                if let Some(paths) = self.drop_batch.flush().filter(|_| accepting) {
                    return build_candidates(paths);
                }
            }
            Message::CandidatesReady(candidates) => {
                if !accepts_drops(&self.route, self.gate.is_open()) {
                    debug!("Discarding {} candidates behind the page", candidates.len());
                } else if candidates.is_empty() {
                    self.intake.drag_leave();
                    self.intake.close_picker();
                } else {
                    let outcome = self.intake.drop_files(candidates);
                    debug!(
                        "Drop handled: changed={}, rejections={}, reports={}",
                        outcome.selection_changed,
                        outcome.rejections.len(),
                        self.intake.listener().changes()
                    );
                }
            }
            Message::SurfaceClicked => {
                self.intake.click(ClickTarget::Surface);
            }
            Message::ClearClicked => {
                if self.intake.click(ClickTarget::ClearControl) == Propagation::Stop {
                    self.intake.close_picker();
                }
            }
            Message::PickerPathChanged(path) => {
                self.picker_path = path;
            }
            Message::PickerSubmit => {
                let path = self.picker_path.trim();
                if !path.is_empty() {
                    let paths = vec![PathBuf::from(path)];
                    self.picker_path.clear();
                    return build_candidates(paths);
                }
            }
            Message::PickerCancel => {
                self.picker_path.clear();
                self.intake.close_picker();
            }
            Message::Ignored => {}
        }
        Task::none()
    }

    /// Moves to `route`, sending unauthenticated sessions to sign in first.
    fn navigate(&mut self, route: Route) -> Task<Message> {
        let route = if self.session_known && !self.authenticated && route.requires_auth() {
            Route::Auth {
                next: route.to_path(),
            }
        } else {
            route
        };
        info!("Navigating to {}", route);

        if self.gate.is_open() {
            self.gate.teardown();
        }
        if route == Route::Upload && self.route != Route::Upload {
            self.intake = UploadIntake::new(StagedUpload::default());
            self.picker_path.clear();
        }
        self.auth_page = match &route {
            Route::Auth { next } => Some(
                AuthPage::new(next.clone())
                    .with_notice(self.gate.last_error().map(str::to_string)),
            ),
            _ => None,
        };

        self.route = route;
        self.sync_previews()
    }

    /// Applies a change in session state to the current page.
    fn follow_session(&mut self) -> Task<Message> {
        let target = self
            .auth_page
            .as_ref()
            .and_then(|page| page.redirect(self.authenticated));
        match target {
            Some(route) => self.navigate(route),
            None => self.navigate(self.route.clone()),
        }
    }

    fn set_auth_notice(&mut self, notice: Option<String>) {
        if let Some(page) = self.auth_page.take() {
            self.auth_page = Some(page.with_notice(notice));
        }
    }

    /// Tears down previews that left the screen and requests the visible ones.
    fn sync_previews(&mut self) -> Task<Message> {
        let visible: Vec<ResumeId> = match &self.route {
            Route::Home => self.resumes.iter().map(|r| r.id.clone()).collect(),
            Route::Resume(id) => vec![id.clone()],
            _ => Vec::new(),
        };
        self.previews.retain(|id| visible.contains(id));

        let mut tasks = Vec::new();
        for resume in self.resumes.iter().filter(|r| visible.contains(&r.id)) {
            if let Some(ticket) = self.previews.request(&resume.id, &resume.image_path) {
                tasks.push(fetch_task(Arc::clone(&self.store), ticket));
            }
        }
        Task::batch(tasks)
    }

    fn fetch(&self, ticket: ResolveTicket) -> Task<Message> {
        fetch_task(Arc::clone(&self.store), ticket)
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        let scroll_locked = self.gate.effects().scroll_locked;
        let page: Element<'_, Message> = match &self.route {
            Route::Home => view::view_resume_list(&self.resumes, &self.previews, scroll_locked),
            Route::Upload => view::view_upload(&self.intake, &self.picker_path),
            Route::Auth { .. } => match &self.auth_page {
                Some(page) => view::view_auth(
                    page,
                    AuthStatus::from_session(
                        !self.session_known || self.signing_in,
                        self.authenticated,
                    ),
                ),
                None => view::view_not_found("/auth"),
            },
            Route::Resume(id) => match self.resumes.iter().find(|r| &r.id == id) {
                Some(resume) => view::view_resume_detail(resume, &self.previews, scroll_locked),
                None => view::view_not_found("Resume not found"),
            },
            Route::NotFound(location) => view::view_not_found(location),
        };

        let mut content = column![view::view_navbar(
            NavAffordances::for_session(self.authenticated),
            self.settings.theme_mode,
        )]
        .spacing(16)
        .padding(16);

        if let Some(error) = &self.error_message {
            content = content.push(
                container(text(error.as_str()).size(14))
                    .padding(12)
                    .width(Length::Fill)
                    .style(rejection_style),
            );
        }

        let base: Element<'_, Message> = container(content.push(page))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(page_style)
            .into();

        if self.gate.is_open() {
            view::view_logout_modal(base)
        } else {
            base
        }
    }

    /// Window file events, plus Escape while a layer holds key capture.
    fn subscription(&self) -> Subscription<Message> {
        let files = event::listen_with(handle_window_event);
        if self.gate.effects().key_target.is_none() {
            return files;
        }

        let keys = keyboard::listen().map(|event| match event {
            keyboard::Event::KeyPressed {
                key: Key::Named(keyboard::key::Named::Escape),
                ..
            } => Message::EscapePressed,
            _ => Message::Ignored,
        });
        Subscription::batch([keys, files])
    }
}

/// Whether window file drops reach the upload intake.
///
/// Drops only land on the upload page, and never while a confirmation
/// covers it.
fn accepts_drops(route: &Route, confirmation_open: bool) -> bool {
    *route == Route::Upload && !confirmation_open
}

/// Maps window file drag-and-drop events to messages.
fn handle_window_event(
    event: Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
        Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    }
}

fn fetch_task(store: Arc<dyn ContentStore>, ticket: ResolveTicket) -> Task<Message> {
    Task::perform(fetch_preview(store, ticket), |(ticket, result)| {
        Message::PreviewFetched(ticket, result.map_err(|e| e.to_string()))
    })
}

fn build_candidates(paths: Vec<PathBuf>) -> Task<Message> {
    Task::perform(candidates_from_paths(paths), Message::CandidatesReady)
}

/// Reads file metadata for each path, in order, skipping unreadable ones.
async fn candidates_from_paths(paths: Vec<PathBuf>) -> Vec<DroppedFile> {
    let mut candidates = Vec::with_capacity(paths.len());
    for path in paths {
        match DroppedFile::from_path(&path).await {
            Ok(file) => candidates.push(file),
            Err(e) => warn!("Skipping {:?}: {}", path, e),
        }
    }
    candidates
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_candidates_keep_drop_order_and_skip_missing() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("cv.pdf");
        let png = dir.path().join("photo.png");
        tokio::fs::write(&pdf, b"%PDF-1.7").await.unwrap();
        tokio::fs::write(&png, b"png").await.unwrap();

        let candidates =
            candidates_from_paths(vec![pdf, dir.path().join("gone.pdf"), png]).await;

        let names: Vec<_> = candidates.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["cv.pdf", "photo.png"]);
        assert_eq!(candidates[0].mime_type, "application/pdf");
        assert_eq!(candidates[0].size, 8);
    }

    #[test]
    fn test_drops_accepted_only_on_uncovered_upload_page() {
        assert!(accepts_drops(&Route::Upload, false));
        assert!(!accepts_drops(&Route::Upload, true));
        assert!(!accepts_drops(&Route::Home, false));
    }

    #[tokio::test]
    async fn test_open_confirmation_blocks_drops_and_owns_escape() {
        let (mut app, _) = Resumind::new();
        app.session_known = true;
        app.authenticated = true;
        let _ = app.navigate(Route::Upload);

        let _ = app.update(Message::RequestLogout);
        assert!(app.gate.is_open());
        assert!(app.gate.effects().scroll_locked);
        assert!(app.gate.effects().key_target.is_some());

        let _ = app.update(Message::FileHovered);
        assert!(!app.drop_batch.is_hovering());
        let _ = app.update(Message::FileDropped(PathBuf::from("cv.pdf")));
        let _ = app.update(Message::CandidatesReady(vec![DroppedFile::new(
            "cv.pdf",
            1024,
            "application/pdf",
        )]));
        assert!(app.intake.selection().is_none());
        assert_eq!(app.intake.listener().changes(), 0);

        let _ = app.update(Message::EscapePressed);
        assert!(!app.gate.is_open());
        assert_eq!(app.gate.effects().key_target, None);

        let _ = app.update(Message::CandidatesReady(vec![DroppedFile::new(
            "cv.pdf",
            1024,
            "application/pdf",
        )]));
        assert_eq!(app.intake.selection().map(|f| f.name.as_str()), Some("cv.pdf"));
    }

    #[test]
    fn test_window_events_map_to_drop_messages() {
        let id = window::Id::unique();
        let dropped = handle_window_event(
            Event::Window(window::Event::FileDropped("cv.pdf".into())),
            event::Status::Ignored,
            id,
        );
        assert!(matches!(dropped, Some(Message::FileDropped(p)) if p == PathBuf::from("cv.pdf")));
        assert!(
            handle_window_event(
                Event::Window(window::Event::Focused),
                event::Status::Ignored,
                id
            )
            .is_none()
        );
    }
}
