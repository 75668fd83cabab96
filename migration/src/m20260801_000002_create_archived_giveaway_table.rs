use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArchivedGiveaway::Table)
                    .if_not_exists()
                    .col(integer(ArchivedGiveaway::Id).primary_key())
                    .col(string(ArchivedGiveaway::GuildId))
                    .col(string(ArchivedGiveaway::ChannelId))
                    .col(string(ArchivedGiveaway::MessageId))
                    .col(string(ArchivedGiveaway::Prize))
                    .col(integer(ArchivedGiveaway::Winners))
                    .col(timestamp(ArchivedGiveaway::StartAt))
                    .col(timestamp(ArchivedGiveaway::EndAt))
                    .col(json(ArchivedGiveaway::Users))
                    .col(json(ArchivedGiveaway::Entries))
                    .col(json(ArchivedGiveaway::Roles))
                    .col(json_null(ArchivedGiveaway::Host))
                    .col(json(ArchivedGiveaway::Won))
                    .col(json(ArchivedGiveaway::Rerolled))
                    .col(text_null(ArchivedGiveaway::Reason))
                    .col(timestamp(ArchivedGiveaway::DeleteAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArchivedGiveaway::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArchivedGiveaway {
    Table,
    Id,
    GuildId,
    ChannelId,
    MessageId,
    Prize,
    Winners,
    StartAt,
    EndAt,
    Users,
    Entries,
    Roles,
    Host,
    Won,
    Rerolled,
    Reason,
    DeleteAt,
}
