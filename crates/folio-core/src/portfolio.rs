//! Main site state container
//!
//! Central state for the whole site. The admin console and the public
//! pages both read through here; persistence and auth never leak past
//! this facade.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;

use folio_auth::{AuthGate, ConfiguredAdmin, Identity};
use folio_content::{
    AboutMe, Achievement, BlogPost, Collection, ContactMessage, ContentRecord, Education, Entry,
    Experience, FinancePlan, FinanceRecord, GalleryItem, ListEditor, Project, RecordStore,
    Repository, Skill,
};
use folio_storage::{Database, DocumentStore};

use crate::config::Config;
use crate::countdown::{countdown_to, next_birthday, Countdown};
use crate::error::CoreError;
use crate::stats::{DashboardStats, FinanceSummary};
use crate::Result;

/// Main site instance
///
/// Owns the store, one list editor per drag-ordered collection, the
/// feed repositories, and the auth gate.
pub struct Portfolio {
    config: Config,
    db: Database,
    store: DocumentStore,
    achievements: ListEditor<Achievement>,
    projects: ListEditor<Project>,
    skills: ListEditor<Skill>,
    experiences: ListEditor<Experience>,
    educations: ListEditor<Education>,
    gallery: ListEditor<GalleryItem>,
    blog: Repository<BlogPost>,
    contacts: Repository<ContactMessage>,
    finance_records: Repository<FinanceRecord>,
    finance_plans: Repository<FinancePlan>,
    profile: Repository<AboutMe>,
    /// The singleton profile, cached after the first read; every public
    /// page renders it
    profile_cache: Arc<RwLock<Option<AboutMe>>>,
    gate: AuthGate,
}

impl Portfolio {
    /// Initialize a new site instance
    pub fn new(config: Config) -> Result<Self> {
        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let db = Database::open(&config.database_path)?;
        let gate = AuthGate::new(Arc::new(ConfiguredAdmin::new(
            config.admin_email.clone(),
            config.admin_password_digest.clone(),
        )));

        Ok(Self::with_database(config, db, gate))
    }

    fn with_database(config: Config, db: Database, gate: AuthGate) -> Self {
        let store = DocumentStore::new(db.clone());

        Self {
            config,
            db,
            achievements: ListEditor::new(Repository::new(store.clone())),
            projects: ListEditor::new(Repository::new(store.clone())),
            skills: ListEditor::new(Repository::new(store.clone())),
            experiences: ListEditor::new(Repository::new(store.clone())),
            educations: ListEditor::new(Repository::new(store.clone())),
            gallery: ListEditor::new(Repository::new(store.clone())),
            blog: Repository::new(store.clone()),
            contacts: Repository::new(store.clone()),
            finance_records: Repository::new(store.clone()),
            finance_plans: Repository::new(store.clone()),
            profile: Repository::new(store.clone()),
            profile_cache: Arc::new(RwLock::new(None)),
            store,
            gate,
        }
    }

    /// Load every ordered collection and resolve the auth state.
    pub fn initialize(&self) -> Result<()> {
        self.achievements.load()?;
        self.projects.load()?;
        self.skills.load()?;
        self.experiences.load()?;
        self.educations.load()?;
        self.gallery.load()?;

        self.gate.initialize();

        tracing::info!("Portfolio initialized");

        Ok(())
    }

    // === Ordered collections ===

    pub fn achievements(&self) -> &ListEditor<Achievement> {
        &self.achievements
    }

    pub fn projects(&self) -> &ListEditor<Project> {
        &self.projects
    }

    pub fn skills(&self) -> &ListEditor<Skill> {
        &self.skills
    }

    pub fn experiences(&self) -> &ListEditor<Experience> {
        &self.experiences
    }

    pub fn educations(&self) -> &ListEditor<Education> {
        &self.educations
    }

    pub fn gallery(&self) -> &ListEditor<GalleryItem> {
        &self.gallery
    }

    /// Projects flagged for the home page, in display order.
    pub fn featured_projects(&self) -> Vec<Entry<Project>> {
        self.projects
            .items()
            .into_iter()
            .filter(|entry| entry.record.is_featured)
            .collect()
    }

    // === Auth ===

    pub fn gate(&self) -> &AuthGate {
        &self.gate
    }

    pub fn sign_in(&self, email: &str, password: &str) -> Result<Identity> {
        Ok(self.gate.sign_in(email, password)?)
    }

    pub fn sign_out(&self) {
        self.gate.sign_out();
    }

    // === Blog ===

    /// All posts, newest first.
    pub fn blog_posts(&self) -> Result<Vec<Entry<BlogPost>>> {
        self.blog.load_recent().map_err(Into::into)
    }

    /// Posts visible on the public site, newest first.
    pub fn published_posts(&self) -> Result<Vec<Entry<BlogPost>>> {
        Ok(self
            .blog_posts()?
            .into_iter()
            .filter(|entry| entry.record.published)
            .collect())
    }

    pub fn published_post_by_slug(&self, slug: &str) -> Result<Option<Entry<BlogPost>>> {
        Ok(self
            .published_posts()?
            .into_iter()
            .find(|entry| entry.record.slug == slug))
    }

    /// Validate and store a post, deriving the slug when blank.
    pub fn create_post(&self, mut post: BlogPost) -> Result<Entry<BlogPost>> {
        post.validate()?;
        post.slug = post.effective_slug();

        let entry = self.blog.insert(&post, None)?;
        tracing::info!(id = %entry.id, slug = %post.slug, "Created blog post");
        Ok(entry)
    }

    pub fn update_post(&self, id: &str, mut post: BlogPost) -> Result<Entry<BlogPost>> {
        post.validate()?;
        post.slug = post.effective_slug();
        Ok(self.blog.update(id, &post)?)
    }

    /// Remove a post. Without confirmation nothing is deleted.
    pub fn delete_post(&self, id: &str, confirmed: bool) -> Result<bool> {
        if !confirmed {
            return Ok(false);
        }
        self.blog.delete(id)?;
        Ok(true)
    }

    // === Contact ===

    /// Public contact form submission.
    pub fn submit_message(&self, message: ContactMessage) -> Result<Entry<ContactMessage>> {
        message.validate()?;
        Ok(self.contacts.insert(&message, None)?)
    }

    /// Inbox, newest first.
    pub fn contact_messages(&self) -> Result<Vec<Entry<ContactMessage>>> {
        self.contacts.load_recent().map_err(Into::into)
    }

    pub fn delete_message(&self, id: &str, confirmed: bool) -> Result<bool> {
        if !confirmed {
            return Ok(false);
        }
        self.contacts.delete(id)?;
        Ok(true)
    }

    // === Finance ===

    pub fn finance_records(&self) -> Result<Vec<Entry<FinanceRecord>>> {
        self.finance_records.load_recent().map_err(Into::into)
    }

    pub fn add_finance_record(&self, record: FinanceRecord) -> Result<Entry<FinanceRecord>> {
        record.validate()?;
        Ok(self.finance_records.insert(&record, None)?)
    }

    pub fn delete_finance_record(&self, id: &str, confirmed: bool) -> Result<bool> {
        if !confirmed {
            return Ok(false);
        }
        self.finance_records.delete(id)?;
        Ok(true)
    }

    pub fn finance_plans(&self) -> Result<Vec<Entry<FinancePlan>>> {
        self.finance_plans.load_recent().map_err(Into::into)
    }

    pub fn add_finance_plan(&self, plan: FinancePlan) -> Result<Entry<FinancePlan>> {
        plan.validate()?;
        Ok(self.finance_plans.insert(&plan, None)?)
    }

    pub fn delete_finance_plan(&self, id: &str, confirmed: bool) -> Result<bool> {
        if !confirmed {
            return Ok(false);
        }
        self.finance_plans.delete(id)?;
        Ok(true)
    }

    pub fn finance_summary(&self) -> Result<FinanceSummary> {
        let records = self.finance_records()?;
        let plans = self.finance_plans()?;
        Ok(FinanceSummary::from_records(&records, &plans))
    }

    // === Profile ===

    /// The singleton profile, defaulted when nothing is stored yet.
    /// Stored reads are cached; saves refresh the cache.
    pub fn profile(&self) -> Result<AboutMe> {
        if let Some(profile) = self.profile_cache.read().clone() {
            return Ok(profile);
        }

        let stored = self.profile.get_keyed(AboutMe::KEY)?;
        if let Some(profile) = &stored {
            *self.profile_cache.write() = Some(profile.clone());
        }
        Ok(stored.unwrap_or_default())
    }

    pub fn save_profile(&self, profile: AboutMe) -> Result<()> {
        profile.validate()?;
        self.profile.put_keyed(AboutMe::KEY, &profile)?;
        *self.profile_cache.write() = Some(profile);
        tracing::info!("Saved profile");
        Ok(())
    }

    // === Dashboard ===

    pub fn dashboard_stats(&self) -> Result<DashboardStats> {
        Ok(DashboardStats {
            achievements: self.store.count(Collection::Achievements.as_str())?,
            projects: self.store.count(Collection::Projects.as_str())?,
            skills: self.store.count(Collection::Skills.as_str())?,
            experiences: self.store.count(Collection::Experiences.as_str())?,
            educations: self.store.count(Collection::Educations.as_str())?,
            gallery: self.store.count(Collection::Gallery.as_str())?,
            blog_posts: self.store.count(Collection::BlogPosts.as_str())?,
            contact_messages: self.store.count(Collection::ContactMessages.as_str())?,
        })
    }

    pub fn birthday_countdown(&self, now: DateTime<Utc>) -> Result<Countdown> {
        let target = next_birthday(self.config.birthday_month, self.config.birthday_day, now)
            .ok_or_else(|| CoreError::Config("Invalid birthday date".to_string()))?;
        Ok(countdown_to(target, now))
    }

    // === Settings ===

    pub fn get_theme(&self) -> Result<Option<String>> {
        Ok(self.db.get_setting("theme")?)
    }

    pub fn set_theme(&self, theme: String) -> Result<()> {
        self.db.set_setting("theme", &theme)?;
        Ok(())
    }

    // === Config ===

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl Clone for Portfolio {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            db: self.db.clone(),
            store: self.store.clone(),
            achievements: self.achievements.clone(),
            projects: self.projects.clone(),
            skills: self.skills.clone(),
            experiences: self.experiences.clone(),
            educations: self.educations.clone(),
            gallery: self.gallery.clone(),
            blog: self.blog.clone(),
            contacts: self.contacts.clone(),
            finance_records: self.finance_records.clone(),
            finance_plans: self.finance_plans.clone(),
            profile: self.profile.clone(),
            profile_cache: Arc::clone(&self.profile_cache),
            gate: self.gate.clone(),
        }
    }
}
