//! Topic entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use quill_core::domain::{TopicSource, TopicStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Status {
    #[sea_orm(string_value = "AVAILABLE")]
    Available,
    #[sea_orm(string_value = "USED")]
    Used,
    #[sea_orm(string_value = "ARCHIVED")]
    Archived,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Source {
    #[sea_orm(string_value = "CUSTOM")]
    Custom,
    #[sea_orm(string_value = "GENERATED")]
    Generated,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub status: Status,
    pub source: Source,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::blog_post::Entity")]
    BlogPost,
}

impl Related<super::blog_post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlogPost.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<TopicStatus> for Status {
    fn from(status: TopicStatus) -> Self {
        match status {
            TopicStatus::Available => Status::Available,
            TopicStatus::Used => Status::Used,
            TopicStatus::Archived => Status::Archived,
        }
    }
}

impl From<Status> for TopicStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Available => TopicStatus::Available,
            Status::Used => TopicStatus::Used,
            Status::Archived => TopicStatus::Archived,
        }
    }
}

impl From<TopicSource> for Source {
    fn from(source: TopicSource) -> Self {
        match source {
            TopicSource::Custom => Source::Custom,
            TopicSource::Generated => Source::Generated,
        }
    }
}

impl From<Source> for TopicSource {
    fn from(source: Source) -> Self {
        match source {
            Source::Custom => TopicSource::Custom,
            Source::Generated => TopicSource::Generated,
        }
    }
}

/// Conversion from SeaORM Model to Domain Topic.
impl From<Model> for quill_core::domain::Topic {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            status: model.status.into(),
            source: model.source.into(),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Topic to SeaORM ActiveModel.
impl From<quill_core::domain::Topic> for ActiveModel {
    fn from(topic: quill_core::domain::Topic) -> Self {
        Self {
            id: Set(topic.id),
            name: Set(topic.name),
            status: Set(topic.status.into()),
            source: Set(topic.source.into()),
            created_at: Set(topic.created_at.into()),
            updated_at: Set(topic.updated_at.into()),
        }
    }
}
