//! 사용자 데이터 액세스 계층 (MongoDB)
//!
//! `users` 컬렉션에 대한 조회/등록/수정/삭제를 [`UserRepository`] 계약으로 제공합니다.
//! 이메일에는 유니크 인덱스가 걸려 있으므로 동시 가입 경쟁도 중복 이메일 에러로 보고됩니다.

use std::time::Duration;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::ReturnDocument;
use mongodb::Collection;

use crate::core::result::DomainResult;
use crate::db::Database;
use crate::domain::entities::UserDocument;
use crate::domain::models::pagination::PaginationQuery;
use crate::domain::models::users::{NewUser, User, UserChanges, Users};
use crate::errors::domain::{
    notification, DomainError, FieldType, InternalError, ItemNotFoundError, ValidationError,
};
use crate::repositories::UserRepository;
use crate::utils::timeout::with_timeout;

pub const USERS_COLLECTION: &str = "users";
const LOCATION: &str = "repositories.users.user_repo.";
const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
    timeout: Duration,
}

impl MongoUserRepository {
    pub fn new(database: &Database, timeout: Duration) -> Self {
        Self {
            collection: database.get_database().collection::<UserDocument>(USERS_COLLECTION),
            timeout,
        }
    }
}

/// 형식이 잘못된 ID는 존재하지 않는 항목으로 취급합니다.
pub(crate) fn parse_object_id(location: &str, id: &str) -> Result<ObjectId, DomainError> {
    ObjectId::parse_str(id).map_err(|_| {
        ItemNotFoundError::new(
            location,
            format!("_id: {}", id),
            notification::ITEM_NOT_FOUND_ERROR_NOTIFICATION,
        )
        .into()
    })
}

pub(crate) fn sort_document(query: &PaginationQuery) -> Document {
    let mut sort = Document::new();
    sort.insert(query.order_by.clone(), query.sort_order.direction());
    sort
}

pub(crate) fn is_duplicate_key(error: &MongoError) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

fn email_exists(location: &str) -> DomainError {
    ValidationError::new(
        location,
        "email",
        FieldType::Required,
        notification::EMAIL_ALREADY_EXISTS_NOTIFICATION,
    )
    .into()
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn get_all_users(&self, query: &PaginationQuery) -> DomainResult<Users> {
        let location = format!("{}get_all_users", LOCATION);
        with_timeout(self.timeout, &location, async {
            let total = self
                .collection
                .count_documents(doc! {})
                .await
                .map_err(|e| DomainError::internal(location.as_str(), e))?;
            let pagination = query.paginate(total)?;

            let documents: Vec<UserDocument> = self
                .collection
                .find(doc! {})
                .sort(sort_document(query))
                .skip(query.skip)
                .limit(query.limit as i64)
                .await
                .map_err(|e| DomainError::internal(location.as_str(), e))?
                .try_collect()
                .await
                .map_err(|e| DomainError::internal(location.as_str(), e))?;

            Ok(Users {
                users: documents.into_iter().map(User::from).collect(),
                pagination,
            })
        })
        .await
        .into()
    }

    async fn get_user_by_id(&self, user_id: &str) -> DomainResult<User> {
        let location = format!("{}get_user_by_id", LOCATION);
        with_timeout(self.timeout, &location, async {
            let object_id = parse_object_id(&location, user_id)?;
            self.collection
                .find_one(doc! { "_id": object_id })
                .await
                .map_err(|e| DomainError::internal(location.as_str(), e))?
                .map(User::from)
                .ok_or_else(|| {
                    ItemNotFoundError::new(
                        location.as_str(),
                        format!("_id: {}", user_id),
                        notification::ITEM_NOT_FOUND_ERROR_NOTIFICATION,
                    )
                    .into()
                })
        })
        .await
        .into()
    }

    async fn get_user_by_email(&self, email: &str) -> DomainResult<User> {
        let location = format!("{}get_user_by_email", LOCATION);
        with_timeout(self.timeout, &location, async {
            self.collection
                .find_one(doc! { "email": email })
                .await
                .map_err(|e| DomainError::internal(location.as_str(), e))?
                .map(User::from)
                .ok_or_else(|| {
                    ItemNotFoundError::new(
                        location.as_str(),
                        format!("email: {}", email),
                        notification::ITEM_NOT_FOUND_ERROR_NOTIFICATION,
                    )
                    .into()
                })
        })
        .await
        .into()
    }

    async fn check_email_duplicate(&self, email: &str) -> DomainResult<()> {
        let location = format!("{}check_email_duplicate", LOCATION);
        with_timeout(self.timeout, &location, async {
            let count = self
                .collection
                .count_documents(doc! { "email": email })
                .await
                .map_err(|e| DomainError::internal(location.as_str(), e))?;

            if count > 0 {
                return Err(email_exists(&location));
            }
            Ok(())
        })
        .await
        .into()
    }

    async fn register(&self, user: NewUser) -> DomainResult<User> {
        let location = format!("{}register", LOCATION);
        with_timeout(self.timeout, &location, async {
            let mut document = UserDocument::from(user);
            let inserted = self.collection.insert_one(&document).await.map_err(|e| {
                if is_duplicate_key(&e) {
                    email_exists(&location)
                } else {
                    DomainError::internal(location.as_str(), e)
                }
            })?;

            let id = inserted.inserted_id.as_object_id().ok_or_else(|| {
                DomainError::from(InternalError::new(
                    location.as_str(),
                    "inserted id is not an ObjectId",
                ))
            })?;
            document.id = Some(id);
            Ok(User::from(document))
        })
        .await
        .into()
    }

    async fn update_current_user(&self, user_id: &str, changes: UserChanges) -> DomainResult<User> {
        let location = format!("{}update_current_user", LOCATION);
        with_timeout(self.timeout, &location, async {
            let object_id = parse_object_id(&location, user_id)?;
            let update = doc! {
                "$set": {
                    "name": changes.name,
                    "updated_at": DateTime::from_millis(changes.updated_at.timestamp_millis()),
                }
            };

            self.collection
                .find_one_and_update(doc! { "_id": object_id }, update)
                .return_document(ReturnDocument::After)
                .await
                .map_err(|e| DomainError::internal(location.as_str(), e))?
                .map(User::from)
                .ok_or_else(|| {
                    ItemNotFoundError::new(
                        location.as_str(),
                        format!("_id: {}", user_id),
                        notification::ITEM_NOT_FOUND_ERROR_NOTIFICATION,
                    )
                    .into()
                })
        })
        .await
        .into()
    }

    async fn delete_user_by_id(&self, user_id: &str) -> DomainResult<()> {
        let location = format!("{}delete_user_by_id", LOCATION);
        with_timeout(self.timeout, &location, async {
            let object_id = parse_object_id(&location, user_id)?;
            let result = self
                .collection
                .delete_one(doc! { "_id": object_id })
                .await
                .map_err(|e| DomainError::internal(location.as_str(), e))?;

            if result.deleted_count == 0 {
                return Err(ItemNotFoundError::new(
                    location.as_str(),
                    format!("_id: {}", user_id),
                    notification::ITEM_NOT_FOUND_ERROR_NOTIFICATION,
                )
                .into());
            }
            Ok(())
        })
        .await
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::pagination::SortOrder;

    #[test]
    fn test_malformed_id_is_item_not_found() {
        match parse_object_id("repositories.users.get_user_by_id", "not-an-id") {
            Err(DomainError::ItemNotFound(error)) => {
                assert_eq!(error.query, "_id: not-an-id");
                assert_eq!(error.base.location, "repositories.users.get_user_by_id");
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let id = ObjectId::new();
        assert_eq!(parse_object_id("l", &id.to_hex()).unwrap(), id);
    }

    #[test]
    fn test_sort_document_uses_order_and_direction() {
        let query = PaginationQuery::new(1, 10, "name", SortOrder::Ascend, "");
        assert_eq!(sort_document(&query), doc! { "name": 1 });

        let query = PaginationQuery::new(1, 10, "created_at", SortOrder::Descend, "");
        assert_eq!(sort_document(&query), doc! { "created_at": -1 });
    }

    #[test]
    fn test_email_exists_is_required_email_validation() {
        match email_exists("l") {
            DomainError::Validation(error) => {
                assert_eq!(error.field, "email");
                assert_eq!(error.field_type, FieldType::Required);
                assert_eq!(error.base.notification, notification::EMAIL_ALREADY_EXISTS_NOTIFICATION);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
