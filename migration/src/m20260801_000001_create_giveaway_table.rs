use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Giveaway::Table)
                    .if_not_exists()
                    .col(pk_auto(Giveaway::Id))
                    .col(string(Giveaway::GuildId))
                    .col(string(Giveaway::ChannelId))
                    .col(string(Giveaway::MessageId))
                    .col(string(Giveaway::Prize))
                    .col(integer(Giveaway::Winners))
                    .col(timestamp(Giveaway::StartAt))
                    .col(timestamp(Giveaway::EndAt))
                    .col(boolean(Giveaway::Pending))
                    .col(json(Giveaway::Users))
                    .col(json(Giveaway::Entries))
                    .col(json(Giveaway::Roles))
                    .col(json_null(Giveaway::Host))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_giveaway_message_id")
                    .table(Giveaway::Table)
                    .col(Giveaway::MessageId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Giveaway::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Giveaway {
    Table,
    Id,
    GuildId,
    ChannelId,
    MessageId,
    Prize,
    Winners,
    StartAt,
    EndAt,
    Pending,
    Users,
    Entries,
    Roles,
    Host,
}
