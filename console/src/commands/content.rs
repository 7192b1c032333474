//! Ordered collection commands
//!
//! The six drag-ordered collections share one command surface: list,
//! create, update, inline single-field edit, drag reorder, and delete
//! with confirmation. The set is stamped out per collection so the
//! frontend gets one flat function per operation.

use serde_json::Value;

use folio_core::{Achievement, Education, Experience, GalleryItem, Project, Skill};

use super::{CommandResult, EntryInfo};
use crate::state::AppState;

macro_rules! ordered_commands {
    (
        $record:ty, $editor:ident,
        $list:ident, $create:ident, $update:ident, $set_field:ident, $reorder:ident, $delete:ident
    ) => {
        pub fn $list(state: &AppState) -> CommandResult<Vec<EntryInfo<$record>>> {
            match state.with_portfolio(|site| Ok(site.$editor().load()?)) {
                Ok(entries) => {
                    CommandResult::ok(entries.into_iter().map(EntryInfo::from).collect())
                }
                Err(e) => CommandResult::err(e.to_string()),
            }
        }

        pub fn $create(state: &AppState, record: $record) -> CommandResult<EntryInfo<$record>> {
            match state.with_portfolio(|site| Ok(site.$editor().create(record)?)) {
                Ok(entry) => CommandResult::ok(entry.into()),
                Err(e) => CommandResult::err(e.to_string()),
            }
        }

        pub fn $update(
            state: &AppState,
            id: String,
            record: $record,
        ) -> CommandResult<EntryInfo<$record>> {
            match state.with_portfolio(|site| Ok(site.$editor().update(&id, record)?)) {
                Ok(entry) => CommandResult::ok(entry.into()),
                Err(e) => CommandResult::err(e.to_string()),
            }
        }

        pub fn $set_field(
            state: &AppState,
            id: String,
            field: String,
            value: Value,
        ) -> CommandResult<()> {
            match state.with_portfolio(|site| Ok(site.$editor().set_field(&id, &field, value)?)) {
                Ok(()) => CommandResult::ok(()),
                Err(e) => CommandResult::err(e.to_string()),
            }
        }

        pub fn $reorder(
            state: &AppState,
            source: usize,
            destination: Option<usize>,
        ) -> CommandResult<Vec<EntryInfo<$record>>> {
            match state.with_portfolio(|site| Ok(site.$editor().reorder(source, destination)?)) {
                Ok(entries) => {
                    CommandResult::ok(entries.into_iter().map(EntryInfo::from).collect())
                }
                Err(e) => CommandResult::err(e.to_string()),
            }
        }

        pub fn $delete(state: &AppState, id: String, confirmed: bool) -> CommandResult<bool> {
            match state.with_portfolio(|site| Ok(site.$editor().delete(&id, confirmed)?)) {
                Ok(deleted) => CommandResult::ok(deleted),
                Err(e) => CommandResult::err(e.to_string()),
            }
        }
    };
}

ordered_commands!(
    Achievement,
    achievements,
    get_achievements,
    create_achievement,
    update_achievement,
    set_achievement_field,
    reorder_achievements,
    delete_achievement
);

ordered_commands!(
    Project,
    projects,
    get_projects,
    create_project,
    update_project,
    set_project_field,
    reorder_projects,
    delete_project
);

ordered_commands!(
    Skill,
    skills,
    get_skills,
    create_skill,
    update_skill,
    set_skill_field,
    reorder_skills,
    delete_skill
);

ordered_commands!(
    Experience,
    experiences,
    get_experiences,
    create_experience,
    update_experience,
    set_experience_field,
    reorder_experiences,
    delete_experience
);

ordered_commands!(
    Education,
    educations,
    get_educations,
    create_education,
    update_education,
    set_education_field,
    reorder_educations,
    delete_education
);

ordered_commands!(
    GalleryItem,
    gallery,
    get_gallery,
    create_gallery_item,
    update_gallery_item,
    set_gallery_item_field,
    reorder_gallery,
    delete_gallery_item
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::test_state;

    #[test]
    fn test_create_and_list() {
        let state = test_state();

        let created = create_skill(
            &state,
            Skill {
                name: "Rust".to_string(),
                level: 90,
                ..Default::default()
            },
        );
        assert!(created.success);

        let listed = get_skills(&state);
        assert!(listed.success);
        assert_eq!(listed.data.unwrap().len(), 1);
    }

    #[test]
    fn test_validation_error_in_envelope() {
        let state = test_state();

        let result = create_achievement(&state, Achievement::default());
        assert!(!result.success);
        assert!(result.error.unwrap().contains("Title is required"));
    }

    #[test]
    fn test_reorder_round_trip() {
        let state = test_state();

        for name in ["A", "B", "C"] {
            let result = create_achievement(
                &state,
                Achievement {
                    title: name.to_string(),
                    ..Default::default()
                },
            );
            assert!(result.success);
        }

        let reordered = reorder_achievements(&state, 1, Some(0));
        assert!(reordered.success);

        let titles: Vec<String> = reordered
            .data
            .unwrap()
            .into_iter()
            .map(|e| e.record.title)
            .collect();
        assert_eq!(titles, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_unconfirmed_delete_is_noop() {
        let state = test_state();

        let created = create_project(
            &state,
            Project {
                title: "Folio".to_string(),
                description: "A portfolio".to_string(),
                ..Default::default()
            },
        );
        let id = created.data.unwrap().id;

        let result = delete_project(&state, id, false);
        assert!(result.success);
        assert_eq!(result.data, Some(false));
        assert_eq!(get_projects(&state).data.unwrap().len(), 1);
    }
}
