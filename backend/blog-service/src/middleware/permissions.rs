/// Ownership checks for content mutation
///
/// The entire authorization model: a user may mutate an item iff they are its
/// author. Evaluated after identity resolution and before any mutation is
/// applied; read operations never consult this module.
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::ContentItem;

fn check_ownership(user_id: Uuid, item: &ContentItem, denial: &str) -> Result<()> {
    if item.author_id == user_id {
        Ok(())
    } else {
        Err(AppError::Forbidden(denial.to_string()))
    }
}

/// Verify a user may edit an item. Only the author can.
pub fn check_edit_permission(user_id: Uuid, item: &ContentItem) -> Result<()> {
    check_ownership(
        user_id,
        item,
        "No tienes permiso para editar esta publicación.",
    )
}

/// Verify a user may delete an item. Only the author can.
pub fn check_delete_permission(user_id: Uuid, item: &ContentItem) -> Result<()> {
    check_ownership(
        user_id,
        item,
        "No tienes permiso para eliminar esta publicación.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentKind;
    use chrono::Utc;

    fn item_by(author_id: Uuid) -> ContentItem {
        ContentItem {
            id: Uuid::new_v4(),
            author_id,
            kind: ContentKind::Post,
            body: "hello".to_string(),
            created_at: Utc::now(),
            parent_id: None,
        }
    }

    #[test]
    fn test_owner_is_allowed() {
        let owner = Uuid::new_v4();
        let item = item_by(owner);

        assert!(check_edit_permission(owner, &item).is_ok());
        assert!(check_delete_permission(owner, &item).is_ok());
    }

    #[test]
    fn test_non_owner_is_denied() {
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let item = item_by(owner);

        assert!(matches!(
            check_edit_permission(stranger, &item),
            Err(AppError::Forbidden(_))
        ));
        assert!(matches!(
            check_delete_permission(stranger, &item),
            Err(AppError::Forbidden(_))
        ));
    }
}
