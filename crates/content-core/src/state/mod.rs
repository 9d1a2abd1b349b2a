//! Application state.
//!
//! One [`Workspace`] value holds everything the UI shows. It only changes
//! through [`Workspace::apply`], which takes an [`Action`] and returns the
//! notice to display plus any side effect the caller must perform.

mod posts;
mod schedule;

pub use posts::PostStore;
pub use schedule::ScheduleIndex;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Platform, PlatformSet, PostId, Tone};
use crate::error::DomainError;
use crate::ports::{GenerationRequest, GenerationSource};

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Generator,
    Calendar,
}

/// Generator form inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorForm {
    pub topic: String,
    pub platform: Platform,
    pub tone: Tone,
}

impl GeneratorForm {
    fn empty(platform: Platform) -> Self {
        Self {
            topic: String::new(),
            platform,
            tone: Tone::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// Transient message for the user (a toast).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Call the generator with this request, then report back with
    /// [`Action::GenerationSucceeded`] or [`Action::GenerationFailed`].
    Generate(GenerationRequest),
    CopyToClipboard(String),
}

/// Result of applying an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    pub notice: Option<Notice>,
    pub effect: Option<Effect>,
}

impl Transition {
    pub fn none() -> Self {
        Self::default()
    }

    fn notice(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            effect: None,
        }
    }

    fn effect(effect: Effect) -> Self {
        Self {
            notice: None,
            effect: Some(effect),
        }
    }
}

/// Every way the workspace can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SwitchView(View),
    UpdateForm(GeneratorForm),
    BeginGeneration,
    GenerationSucceeded {
        text: String,
        source: Option<GenerationSource>,
        at: DateTime<Utc>,
    },
    GenerationFailed {
        message: String,
    },
    BeginEdit(PostId),
    SaveEdit {
        id: PostId,
        text: String,
    },
    Delete(PostId),
    Copy(PostId),
    Schedule {
        id: PostId,
        date: NaiveDate,
    },
    /// Calendar click: schedule the most recent post on `date`.
    ScheduleFirst {
        date: NaiveDate,
    },
    Unschedule(PostId),
}

/// The whole application state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    view: View,
    form: GeneratorForm,
    is_generating: bool,
    editing_id: Option<PostId>,
    posts: PostStore,
    scheduled: ScheduleIndex,
    #[serde(skip)]
    platforms: PlatformSet,
    #[serde(skip)]
    pending: Option<GenerationRequest>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(PlatformSet::default())
    }
}

impl Workspace {
    pub fn new(platforms: PlatformSet) -> Self {
        Self {
            view: View::default(),
            form: GeneratorForm::empty(platforms.default_platform()),
            is_generating: false,
            editing_id: None,
            posts: PostStore::new(),
            scheduled: ScheduleIndex::new(),
            platforms,
            pending: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn form(&self) -> &GeneratorForm {
        &self.form
    }

    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    pub fn editing_id(&self) -> Option<&PostId> {
        self.editing_id.as_ref()
    }

    pub fn posts(&self) -> &PostStore {
        &self.posts
    }

    pub fn schedule(&self) -> &ScheduleIndex {
        &self.scheduled
    }

    pub fn platforms(&self) -> &PlatformSet {
        &self.platforms
    }

    /// Apply one action.
    pub fn apply(&mut self, action: Action) -> Result<Transition, DomainError> {
        match action {
            Action::SwitchView(view) => {
                self.view = view;
                Ok(Transition::none())
            }
            Action::UpdateForm(form) => {
                self.platforms.ensure(form.platform)?;
                self.form = form;
                Ok(Transition::none())
            }
            Action::BeginGeneration => self.begin_generation(),
            Action::GenerationSucceeded { text, source, at } => {
                let request = self.finish_generation()?;
                let post = self
                    .posts
                    .create(request.platform, request.topic, text, at);
                tracing::info!(post_id = %post.id, platform = %post.platform, "Generated post stored");

                let description = match source {
                    Some(GenerationSource::Model) => "Unique post generated by the language model",
                    _ => "Post created from a template",
                };
                Ok(Transition::notice(Notice::info("Post created!", description)))
            }
            Action::GenerationFailed { message } => {
                self.finish_generation()?;
                tracing::warn!(error = %message, "Generation failed");
                Ok(Transition::notice(Notice::error(message)))
            }
            Action::BeginEdit(id) => {
                if self.posts.get(&id).is_none() {
                    return Err(DomainError::post_not_found(id.as_str()));
                }
                self.editing_id = Some(id);
                Ok(Transition::none())
            }
            Action::SaveEdit { id, text } => {
                self.editing_id = None;
                if self.posts.update_text(&id, text) {
                    Ok(Transition::notice(Notice::info("Saved", "Changes saved")))
                } else {
                    Ok(Transition::none())
                }
            }
            Action::Delete(id) => {
                if self.posts.remove(&id).is_none() {
                    return Ok(Transition::none());
                }
                if self.editing_id.as_ref() == Some(&id) {
                    self.editing_id = None;
                }
                Ok(Transition::notice(Notice::info(
                    "Deleted",
                    "Post removed from the library",
                )))
            }
            Action::Copy(id) => match self.posts.get(&id) {
                Some(post) => Ok(Transition {
                    notice: Some(Notice::info(
                        "Copied!",
                        "Post text copied to the clipboard",
                    )),
                    effect: Some(Effect::CopyToClipboard(post.text.clone())),
                }),
                None => Ok(Transition::none()),
            },
            Action::Schedule { id, date } => {
                let post = self
                    .posts
                    .get(&id)
                    .ok_or_else(|| DomainError::post_not_found(id.as_str()))?;
                self.scheduled.schedule(post, date);
                Ok(Transition::notice(scheduled_notice(date)))
            }
            Action::ScheduleFirst { date } => match self.posts.first() {
                Some(post) => {
                    self.scheduled.schedule(post, date);
                    Ok(Transition::notice(scheduled_notice(date)))
                }
                None => Ok(Transition::none()),
            },
            Action::Unschedule(id) => {
                if self.scheduled.unschedule(&id) == 0 {
                    return Ok(Transition::none());
                }
                Ok(Transition::notice(Notice::info(
                    "Deleted",
                    "Post removed from the calendar",
                )))
            }
        }
    }

    fn begin_generation(&mut self) -> Result<Transition, DomainError> {
        if self.is_generating {
            return Err(DomainError::Conflict(
                "A post is already being generated".to_string(),
            ));
        }
        if self.form.topic.trim().is_empty() {
            return Err(DomainError::Validation("Enter a post topic".to_string()));
        }
        self.platforms.ensure(self.form.platform)?;

        let request = GenerationRequest {
            topic: self.form.topic.clone(),
            platform: self.form.platform,
            tone: self.form.tone,
        };
        self.is_generating = true;
        self.pending = Some(request.clone());
        Ok(Transition::effect(Effect::Generate(request)))
    }

    fn finish_generation(&mut self) -> Result<GenerationRequest, DomainError> {
        self.is_generating = false;
        self.pending
            .take()
            .ok_or_else(|| DomainError::Conflict("No generation in progress".to_string()))
    }
}

fn scheduled_notice(date: NaiveDate) -> Notice {
    Notice::info(
        "Scheduled!",
        format!("Post scheduled for {}", date.format("%d.%m.%Y")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_schedule_date;

    fn at(millis: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(millis).unwrap()
    }

    fn form(topic: &str, platform: Platform) -> GeneratorForm {
        GeneratorForm {
            topic: topic.to_string(),
            platform,
            tone: Tone::Friendly,
        }
    }

    fn generate(ws: &mut Workspace, topic: &str, platform: Platform, millis: i64) -> PostId {
        ws.apply(Action::UpdateForm(form(topic, platform))).unwrap();
        ws.apply(Action::BeginGeneration).unwrap();
        ws.apply(Action::GenerationSucceeded {
            text: format!("{topic} text"),
            source: Some(GenerationSource::Template),
            at: at(millis),
        })
        .unwrap();
        ws.posts().first().unwrap().id.clone()
    }

    #[test]
    fn create_schedule_and_lookup_scenario() {
        let mut ws = Workspace::default();
        let a = generate(&mut ws, "fitness", Platform::Telegram, 1_710_000_000_000);

        assert_eq!(ws.posts().len(), 1);
        let stored = ws.posts().first().unwrap();
        assert_eq!(stored.topic, "fitness");
        assert_eq!(stored.platform, Platform::Telegram);

        let date = parse_schedule_date("2024-03-15").unwrap();
        let t = ws
            .apply(Action::Schedule {
                id: a.clone(),
                date,
            })
            .unwrap();
        assert_eq!(
            t.notice.unwrap().description,
            "Post scheduled for 15.03.2024"
        );
        assert_eq!(ws.schedule().len(), 1);
        assert_eq!(ws.schedule().iter().next().unwrap().scheduled_date, date);

        let hits = ws.schedule().for_date(date);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id(), &a);
        assert!(
            ws.schedule()
                .for_date(parse_schedule_date("2024-03-16").unwrap())
                .is_empty()
        );
    }

    #[test]
    fn begin_generation_rejects_blank_topic_without_side_effects() {
        let mut ws = Workspace::default();
        ws.apply(Action::UpdateForm(form("   ", Platform::Telegram)))
            .unwrap();

        let err = ws.apply(Action::BeginGeneration).unwrap_err();
        assert_eq!(err, DomainError::Validation("Enter a post topic".into()));
        assert!(!ws.is_generating());
    }

    #[test]
    fn begin_generation_yields_request_and_blocks_a_second_one() {
        let mut ws = Workspace::default();
        ws.apply(Action::UpdateForm(GeneratorForm {
            topic: "travel".into(),
            platform: Platform::Instagram,
            tone: Tone::Motivational,
        }))
        .unwrap();

        let t = ws.apply(Action::BeginGeneration).unwrap();
        assert_eq!(
            t.effect,
            Some(Effect::Generate(GenerationRequest {
                topic: "travel".into(),
                platform: Platform::Instagram,
                tone: Tone::Motivational,
            }))
        );
        assert!(ws.is_generating());

        assert!(matches!(
            ws.apply(Action::BeginGeneration),
            Err(DomainError::Conflict(_))
        ));
    }

    #[test]
    fn failed_generation_leaves_store_unchanged() {
        let mut ws = Workspace::default();
        ws.apply(Action::UpdateForm(form("fitness", Platform::Telegram)))
            .unwrap();
        ws.apply(Action::BeginGeneration).unwrap();

        let t = ws
            .apply(Action::GenerationFailed {
                message: "quota exceeded".into(),
            })
            .unwrap();

        let notice = t.notice.unwrap();
        assert_eq!(notice.description, "quota exceeded");
        assert_eq!(notice.variant, NoticeVariant::Destructive);
        assert!(ws.posts().is_empty());
        assert!(!ws.is_generating());
    }

    #[test]
    fn generated_post_uses_form_captured_at_start() {
        let mut ws = Workspace::default();
        ws.apply(Action::UpdateForm(form("first", Platform::Threads)))
            .unwrap();
        ws.apply(Action::BeginGeneration).unwrap();
        // form edits while the request is in flight do not leak into the post
        ws.apply(Action::UpdateForm(form("second", Platform::Youtube)))
            .unwrap();
        let t = ws
            .apply(Action::GenerationSucceeded {
                text: "body".into(),
                source: Some(GenerationSource::Model),
                at: at(1),
            })
            .unwrap();

        let post = ws.posts().first().unwrap();
        assert_eq!(post.topic, "first");
        assert_eq!(post.platform, Platform::Threads);
        assert_eq!(
            t.notice.unwrap().description,
            "Unique post generated by the language model"
        );
    }

    #[test]
    fn completion_without_pending_request_is_rejected() {
        let mut ws = Workspace::default();
        let err = ws
            .apply(Action::GenerationSucceeded {
                text: "orphan".into(),
                source: None,
                at: at(1),
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert!(ws.posts().is_empty());
    }

    #[test]
    fn disabled_platform_is_rejected_by_form() {
        let mut ws = Workspace::new(PlatformSet::parse("vk,telegram,instagram").unwrap());
        assert_eq!(ws.form().platform, Platform::Vk);
        assert!(matches!(
            ws.apply(Action::UpdateForm(form("x", Platform::Threads))),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn edit_flow_updates_only_target_and_clears_editing() {
        let mut ws = Workspace::default();
        let a = generate(&mut ws, "a", Platform::Telegram, 1_000);
        let b = generate(&mut ws, "b", Platform::Instagram, 2_000);

        ws.apply(Action::BeginEdit(a.clone())).unwrap();
        assert_eq!(ws.editing_id(), Some(&a));

        let t = ws
            .apply(Action::SaveEdit {
                id: a.clone(),
                text: "rewritten".into(),
            })
            .unwrap();
        assert_eq!(t.notice.unwrap().title, "Saved");
        assert_eq!(ws.editing_id(), None);
        assert_eq!(ws.posts().get(&a).unwrap().text, "rewritten");
        assert_eq!(ws.posts().get(&b).unwrap().text, "b text");
    }

    #[test]
    fn save_edit_of_unknown_post_is_silent() {
        let mut ws = Workspace::default();
        generate(&mut ws, "a", Platform::Telegram, 1_000);
        let t = ws
            .apply(Action::SaveEdit {
                id: PostId::new("nope"),
                text: "x".into(),
            })
            .unwrap();
        assert_eq!(t, Transition::none());
    }

    #[test]
    fn begin_edit_requires_existing_post() {
        let mut ws = Workspace::default();
        assert!(matches!(
            ws.apply(Action::BeginEdit(PostId::new("nope"))),
            Err(DomainError::NotFound { .. })
        ));
    }

    #[test]
    fn delete_removes_one_and_ignores_unknown() {
        let mut ws = Workspace::default();
        let a = generate(&mut ws, "a", Platform::Telegram, 1_000);
        generate(&mut ws, "b", Platform::Telegram, 2_000);
        ws.apply(Action::BeginEdit(a.clone())).unwrap();

        let t = ws.apply(Action::Delete(a.clone())).unwrap();
        assert!(t.notice.is_some());
        assert_eq!(ws.posts().len(), 1);
        assert_eq!(ws.editing_id(), None);

        let t = ws.apply(Action::Delete(a)).unwrap();
        assert_eq!(t, Transition::none());
        assert_eq!(ws.posts().len(), 1);
    }

    #[test]
    fn delete_keeps_scheduled_copies() {
        let mut ws = Workspace::default();
        let a = generate(&mut ws, "a", Platform::Telegram, 1_000);
        let date = parse_schedule_date("2024-03-15").unwrap();
        ws.apply(Action::Schedule { id: a.clone(), date }).unwrap();

        ws.apply(Action::Delete(a)).unwrap();
        assert!(ws.posts().is_empty());
        assert_eq!(ws.schedule().len(), 1);
    }

    #[test]
    fn copy_emits_clipboard_effect() {
        let mut ws = Workspace::default();
        let a = generate(&mut ws, "a", Platform::Telegram, 1_000);

        let t = ws.apply(Action::Copy(a)).unwrap();
        assert_eq!(t.effect, Some(Effect::CopyToClipboard("a text".into())));
        assert_eq!(t.notice.unwrap().title, "Copied!");

        let t = ws.apply(Action::Copy(PostId::new("nope"))).unwrap();
        assert_eq!(t, Transition::none());
    }

    #[test]
    fn schedule_unknown_post_is_not_found() {
        let mut ws = Workspace::default();
        let err = ws
            .apply(Action::Schedule {
                id: PostId::new("nope"),
                date: parse_schedule_date("2024-03-15").unwrap(),
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(ws.schedule().is_empty());
    }

    #[test]
    fn schedule_first_uses_most_recent_post() {
        let mut ws = Workspace::default();
        let date = parse_schedule_date("2024-03-15").unwrap();

        let t = ws.apply(Action::ScheduleFirst { date }).unwrap();
        assert_eq!(t, Transition::none());
        assert!(ws.schedule().is_empty());

        generate(&mut ws, "older", Platform::Telegram, 1_000);
        let newest = generate(&mut ws, "newer", Platform::Instagram, 2_000);
        ws.apply(Action::ScheduleFirst { date }).unwrap();

        let hits = ws.schedule().for_date(date);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id(), &newest);
    }

    #[test]
    fn unschedule_is_silent_for_unknown_ids() {
        let mut ws = Workspace::default();
        let a = generate(&mut ws, "a", Platform::Telegram, 1_000);
        let date = parse_schedule_date("2024-03-15").unwrap();
        ws.apply(Action::Schedule { id: a.clone(), date }).unwrap();

        assert_eq!(
            ws.apply(Action::Unschedule(PostId::new("nope"))).unwrap(),
            Transition::none()
        );
        assert_eq!(ws.schedule().len(), 1);

        let t = ws.apply(Action::Unschedule(a)).unwrap();
        assert!(t.notice.is_some());
        assert!(ws.schedule().is_empty());
        // the library is untouched
        assert_eq!(ws.posts().len(), 1);
    }

    #[test]
    fn switch_view_and_snapshot() {
        let mut ws = Workspace::default();
        ws.apply(Action::SwitchView(View::Calendar)).unwrap();
        assert_eq!(ws.view(), View::Calendar);

        let json = serde_json::to_value(&ws).unwrap();
        assert_eq!(json["view"], "calendar");
        assert_eq!(json["isGenerating"], false);
        assert_eq!(json["form"]["platform"], "telegram");
        assert!(json["posts"].as_array().unwrap().is_empty());
        assert!(json.get("platforms").is_none());
    }
}
