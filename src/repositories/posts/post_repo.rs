//! 게시물 데이터 액세스 계층 (MongoDB)

use std::time::Duration;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, DateTime};
use mongodb::options::ReturnDocument;
use mongodb::Collection;

use crate::core::result::DomainResult;
use crate::db::Database;
use crate::domain::entities::PostDocument;
use crate::domain::models::pagination::PaginationQuery;
use crate::domain::models::posts::{NewPost, Post, PostChanges, Posts};
use crate::errors::domain::{notification, DomainError, InternalError, ItemNotFoundError};
use crate::repositories::users::user_repo::{parse_object_id, sort_document};
use crate::repositories::PostRepository;
use crate::utils::timeout::with_timeout;

pub const POSTS_COLLECTION: &str = "posts";
const LOCATION: &str = "repositories.posts.post_repo.";

pub struct MongoPostRepository {
    collection: Collection<PostDocument>,
    timeout: Duration,
}

impl MongoPostRepository {
    pub fn new(database: &Database, timeout: Duration) -> Self {
        Self {
            collection: database.get_database().collection::<PostDocument>(POSTS_COLLECTION),
            timeout,
        }
    }
}

fn post_not_found(location: &str, post_id: &str) -> DomainError {
    ItemNotFoundError::new(
        location,
        format!("_id: {}", post_id),
        notification::ITEM_NOT_FOUND_ERROR_NOTIFICATION,
    )
    .into()
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn get_all_posts(&self, query: &PaginationQuery) -> DomainResult<Posts> {
        let location = format!("{}get_all_posts", LOCATION);
        with_timeout(self.timeout, &location, async {
            let total = self
                .collection
                .count_documents(doc! {})
                .await
                .map_err(|e| DomainError::internal(location.as_str(), e))?;
            let pagination = query.paginate(total)?;

            let documents: Vec<PostDocument> = self
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

            Ok(Posts {
                posts: documents.into_iter().map(Post::from).collect(),
                pagination,
            })
        })
        .await
        .into()
    }

    async fn get_post_by_id(&self, post_id: &str) -> DomainResult<Post> {
        let location = format!("{}get_post_by_id", LOCATION);
        with_timeout(self.timeout, &location, async {
            let object_id = parse_object_id(&location, post_id)?;
            self.collection
                .find_one(doc! { "_id": object_id })
                .await
                .map_err(|e| DomainError::internal(location.as_str(), e))?
                .map(Post::from)
                .ok_or_else(|| post_not_found(&location, post_id))
        })
        .await
        .into()
    }

    async fn create_post(&self, post: NewPost) -> DomainResult<Post> {
        let location = format!("{}create_post", LOCATION);
        with_timeout(self.timeout, &location, async {
            let mut document = PostDocument::from(post);
            let inserted = self
                .collection
                .insert_one(&document)
                .await
                .map_err(|e| DomainError::internal(location.as_str(), e))?;

            let id = inserted.inserted_id.as_object_id().ok_or_else(|| {
                DomainError::from(InternalError::new(
                    location.as_str(),
                    "inserted id is not an ObjectId",
                ))
            })?;
            document.id = Some(id);
            Ok(Post::from(document))
        })
        .await
        .into()
    }

    async fn update_post(&self, post_id: &str, changes: PostChanges) -> DomainResult<Post> {
        let location = format!("{}update_post", LOCATION);
        with_timeout(self.timeout, &location, async {
            let object_id = parse_object_id(&location, post_id)?;
            let updated_at = DateTime::from_millis(changes.updated_at.timestamp_millis());
            let update = match changes.image {
                Some(image) => doc! {
                    "$set": {
                        "title": changes.title,
                        "content": changes.content,
                        "image": image,
                        "updated_at": updated_at,
                    }
                },
                None => doc! {
                    "$set": {
                        "title": changes.title,
                        "content": changes.content,
                        "updated_at": updated_at,
                    },
                    "$unset": { "image": "" }
                },
            };

            self.collection
                .find_one_and_update(doc! { "_id": object_id }, update)
                .return_document(ReturnDocument::After)
                .await
                .map_err(|e| DomainError::internal(location.as_str(), e))?
                .map(Post::from)
                .ok_or_else(|| post_not_found(&location, post_id))
        })
        .await
        .into()
    }

    async fn delete_post_by_id(&self, post_id: &str) -> DomainResult<()> {
        let location = format!("{}delete_post_by_id", LOCATION);
        with_timeout(self.timeout, &location, async {
            let object_id = parse_object_id(&location, post_id)?;
            let result = self
                .collection
                .delete_one(doc! { "_id": object_id })
                .await
                .map_err(|e| DomainError::internal(location.as_str(), e))?;

            if result.deleted_count == 0 {
                return Err(post_not_found(&location, post_id));
            }
            Ok(())
        })
        .await
        .into()
    }
}
