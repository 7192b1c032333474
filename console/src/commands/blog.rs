//! Blog post commands
use folio_core::BlogPost;

use super::{CommandResult, EntryInfo};
use crate::state::AppState;

/// Every post, drafts included, newest first. Admin view.
pub fn get_posts(state: &AppState) -> CommandResult<Vec<EntryInfo<BlogPost>>> {
    match state.with_portfolio(|site| site.blog_posts()) {
        Ok(posts) => CommandResult::ok(posts.into_iter().map(EntryInfo::from).collect()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Published posts only, newest first. Public view.
pub fn get_published_posts(state: &AppState) -> CommandResult<Vec<EntryInfo<BlogPost>>> {
    match state.with_portfolio(|site| site.published_posts()) {
        Ok(posts) => CommandResult::ok(posts.into_iter().map(EntryInfo::from).collect()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn get_post_by_slug(state: &AppState, slug: String) -> CommandResult<Option<EntryInfo<BlogPost>>> {
    match state.with_portfolio(|site| site.published_post_by_slug(&slug)) {
        Ok(post) => CommandResult::ok(post.map(EntryInfo::from)),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn create_post(state: &AppState, post: BlogPost) -> CommandResult<EntryInfo<BlogPost>> {
    match state.with_portfolio(|site| site.create_post(post)) {
        Ok(entry) => CommandResult::ok(entry.into()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn update_post(
    state: &AppState,
    id: String,
    post: BlogPost,
) -> CommandResult<EntryInfo<BlogPost>> {
    match state.with_portfolio(|site| site.update_post(&id, post)) {
        Ok(entry) => CommandResult::ok(entry.into()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn delete_post(state: &AppState, id: String, confirmed: bool) -> CommandResult<bool> {
    match state.with_portfolio(|site| site.delete_post(&id, confirmed)) {
        Ok(deleted) => CommandResult::ok(deleted),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::test_state;

    #[test]
    fn test_publish_and_fetch_by_slug() {
        let state = test_state();

        let created = create_post(
            &state,
            BlogPost {
                title: "Hello World".to_string(),
                content: "Body".to_string(),
                published: true,
                ..Default::default()
            },
        );
        assert!(created.success);
        assert_eq!(created.data.unwrap().record.slug, "hello-world");

        let fetched = get_post_by_slug(&state, "hello-world".to_string());
        assert!(fetched.data.unwrap().is_some());
    }

    #[test]
    fn test_drafts_hidden_from_public_feed() {
        let state = test_state();

        create_post(
            &state,
            BlogPost {
                title: "Draft".to_string(),
                content: "Body".to_string(),
                ..Default::default()
            },
        );

        assert_eq!(get_posts(&state).data.unwrap().len(), 1);
        assert!(get_published_posts(&state).data.unwrap().is_empty());
    }
}
