//! Widget orchestration: bootstrap, lazy loading and posting.

use crate::config::WidgetConfig;
use crate::error::{WidgetError, WidgetResult};
use crate::gate::OriginGate;
use crate::github::backend::IssueBackend;
use crate::github::error::{GitHubError, GitHubResult};
use crate::github::models::{Issue, IssueComment, NewIssue, User};
use crate::page::{PageAttributes, ThreadIdentity};
use crate::pagination::{CommentPaginationEngine, Phase};
use crate::timeline::{Notice, TimelineSink};
use log::info;

/// One embedded comment thread.
///
/// Owns the backend, the timeline, the origin gate and (once the thread has
/// comments) the pagination engine for a single page session.
#[derive(Debug)]
pub struct CommentWidget<B, T> {
    page: PageAttributes,
    config: WidgetConfig,
    backend: B,
    timeline: T,
    gate: OriginGate,
    issue: Option<Issue>,
    user: Option<User>,
    engine: Option<CommentPaginationEngine>,
    not_installed_reported: bool,
}

impl<B, T> CommentWidget<B, T>
where
    B: IssueBackend,
    T: TimelineSink,
{
    /// Look up the backing issue and the signed-in user, render the thread's
    /// first comments and ask the host to re-measure.
    ///
    /// A missing issue is not an error: it is created on the first comment.
    ///
    /// # Errors
    ///
    /// [`WidgetError::Fetch`] when the issue, the user or an eager comment
    /// page cannot be loaded.
    pub async fn bootstrap(
        page: PageAttributes,
        backend: B,
        mut timeline: T,
        config: WidgetConfig,
    ) -> WidgetResult<Self> {
        let (issue, user) = futures::try_join!(load_issue(&backend, &page), backend.load_user())?;
        info!(
            "Bootstrapped {}/{}: issue {}, user {}",
            page.owner,
            page.repo,
            issue
                .as_ref()
                .map_or_else(|| "not created yet".to_string(), |i| format!("#{}", i.number)),
            user.as_ref().map_or("anonymous", |u| u.login.as_str())
        );

        let engine = match &issue {
            Some(issue) if issue.comments > 0 => Some(
                CommentPaginationEngine::start(
                    issue,
                    page.size,
                    config.max_growth_page_size,
                    &backend,
                    &mut timeline,
                )
                .await?,
            ),
            _ => None,
        };
        timeline.request_remeasure();

        let gate = OriginGate::new(page.origin.clone(), page.owner.clone(), page.repo.clone());
        Ok(Self {
            page,
            config,
            backend,
            timeline,
            gate,
            issue,
            user,
            engine,
            not_installed_reported: false,
        })
    }

    /// Reveal the next batch of hidden comments.
    ///
    /// # Errors
    ///
    /// [`WidgetError::LoaderUnavailable`] when nothing is hidden, otherwise
    /// see [`CommentPaginationEngine::load_more`].
    pub async fn load_more(&mut self) -> WidgetResult<Phase> {
        let phase = match self.engine.as_mut() {
            Some(engine) => engine.load_more(&self.backend, &mut self.timeline).await?,
            None => return Err(WidgetError::LoaderUnavailable),
        };
        self.timeline.request_remeasure();
        Ok(phase)
    }

    /// Post a comment, creating the backing issue first when needed.
    ///
    /// The origin gate runs before any write; a refused origin means no
    /// issue is created and nothing is posted.
    ///
    /// # Errors
    ///
    /// [`WidgetError::IssueLocked`], [`WidgetError::OriginNotPermitted`], or
    /// [`WidgetError::Fetch`] when creating the issue or posting fails.
    pub async fn submit(&mut self, markdown: &str) -> WidgetResult<IssueComment> {
        if let Some(issue) = &self.issue
            && issue.locked
        {
            return Err(WidgetError::IssueLocked(issue.number));
        }

        self.gate
            .assert_origin(&self.backend, &mut self.timeline)
            .await?;

        let issue_number = match &self.issue {
            Some(issue) => issue.number,
            None => {
                let request = self.new_issue_request()?;
                let result = self.backend.create_issue(&request).await;
                let created = match result {
                    Ok(issue) => issue,
                    Err(e) => return Err(self.backend_failure(e)),
                };
                info!("Created issue #{} for \"{}\"", created.number, request.term);
                let number = created.number;
                self.issue = Some(created);
                number
            }
        };

        let result = self.backend.post_comment(issue_number, markdown).await;
        let comment = match result {
            Ok(comment) => comment,
            Err(e) => return Err(self.backend_failure(e)),
        };
        if let Some(issue) = self.issue.as_mut() {
            issue.comments += 1;
        }
        self.timeline.insert_comment(&comment, true);
        self.timeline.request_remeasure();
        Ok(comment)
    }

    /// Render the "app not installed" notice, at most once per session.
    pub fn report_not_installed(&mut self) {
        if self.not_installed_reported {
            return;
        }
        self.not_installed_reported = true;
        self.timeline.insert_notice(&Notice::NotInstalled {
            owner: self.page.owner.clone(),
            repo: self.page.repo.clone(),
        });
        self.timeline.request_remeasure();
    }

    #[must_use]
    pub fn page(&self) -> &PageAttributes {
        &self.page
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn issue(&self) -> Option<&Issue> {
        self.issue.as_ref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn engine(&self) -> Option<&CommentPaginationEngine> {
        self.engine.as_ref()
    }

    /// Whether hidden comments are waiting behind the loader.
    #[must_use]
    pub fn has_hidden_comments(&self) -> bool {
        self.engine
            .as_ref()
            .is_some_and(|engine| engine.state().phase() == Phase::AwaitingActivation)
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.issue.as_ref().is_some_and(|issue| issue.locked)
    }

    #[must_use]
    pub fn timeline(&self) -> &T {
        &self.timeline
    }

    #[must_use]
    pub fn into_timeline(self) -> T {
        self.timeline
    }

    fn new_issue_request(&self) -> WidgetResult<NewIssue> {
        match &self.page.thread {
            ThreadIdentity::Term(term) => Ok(NewIssue {
                term: term.clone(),
                url: self.page.url.clone(),
                page_title: self.page.title.clone(),
                description: self.page.description.clone(),
                label: self.page.label.clone(),
            }),
            ThreadIdentity::Number(number) => Err(WidgetError::Fetch(GitHubError::NotFound(
                format!("issue #{number} in {}/{}", self.page.owner, self.page.repo),
            ))),
        }
    }

    fn backend_failure(&mut self, error: GitHubError) -> WidgetError {
        if matches!(error, GitHubError::NotInstalled { .. }) {
            self.report_not_installed();
        }
        WidgetError::Fetch(error)
    }
}

async fn load_issue<B: IssueBackend>(
    backend: &B,
    page: &PageAttributes,
) -> GitHubResult<Option<Issue>> {
    match &page.thread {
        ThreadIdentity::Number(number) => backend.load_issue_by_number(*number).await,
        ThreadIdentity::Term(term) => backend.load_issue_by_term(term).await,
    }
}
