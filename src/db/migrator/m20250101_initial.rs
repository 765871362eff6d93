use crate::entities::prelude::*;
use crate::entities::{properties, users};
use rust_decimal::Decimal;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Schema;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Credentials seeded so a fresh database can be administered at all.
const SEED_ADMIN_USERNAME: &str = "admin";
const SEED_ADMIN_EMAIL: &str = "admin@stayhaven.dev";
const SEED_ADMIN_PASSWORD: &str = "admin123";

fn amenities_json(amenities: &[&str]) -> String {
    serde_json::to_string(amenities).unwrap_or_default()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let schema = Schema::new(backend);

        manager
            .create_table(
                schema
                    .create_table_from_entity(Properties)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Bookings)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Users)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        let now = chrono::Utc::now().to_rfc3339();

        // Sample listings; generated ids are 1 and 2 on a fresh database.
        let seed_properties = sea_orm_migration::sea_query::Query::insert()
            .into_table(Properties)
            .columns([
                properties::Column::Title,
                properties::Column::Description,
                properties::Column::Price,
                properties::Column::Location,
                properties::Column::City,
                properties::Column::Bedrooms,
                properties::Column::Bathrooms,
                properties::Column::ImageUrl,
                properties::Column::Amenities,
                properties::Column::Status,
                properties::Column::Featured,
                properties::Column::CreatedAt,
            ])
            .values_panic([
                "Villa Azure Vista".into(),
                "Luxurious villa with stunning ocean views".into(),
                Decimal::new(250, 0).into(),
                "Martil Beach".into(),
                "Martil".into(),
                4.into(),
                3.into(),
                "/placeholder.svg".into(),
                amenities_json(&["WiFi", "Pool", "Kitchen", "Parking"]).into(),
                "approved".into(),
                true.into(),
                now.clone().into(),
            ])
            .values_panic([
                "Coastal Retreat".into(),
                "Modern apartment near the beach".into(),
                Decimal::new(150, 0).into(),
                "Marina District".into(),
                "Martil".into(),
                2.into(),
                2.into(),
                "/placeholder.svg".into(),
                amenities_json(&["WiFi", "Air Conditioning", "Kitchen"]).into(),
                "approved".into(),
                true.into(),
                now.clone().into(),
            ])
            .to_owned();

        manager.exec_stmt(seed_properties).await?;

        let seed_admin = sea_orm_migration::sea_query::Query::insert()
            .into_table(Users)
            .columns([
                users::Column::Username,
                users::Column::Email,
                users::Column::Password,
                users::Column::Name,
                users::Column::Role,
                users::Column::Status,
                users::Column::CreatedAt,
            ])
            .values_panic([
                SEED_ADMIN_USERNAME.into(),
                SEED_ADMIN_EMAIL.into(),
                SEED_ADMIN_PASSWORD.into(),
                "Admin User".into(),
                "admin".into(),
                "active".into(),
                now.into(),
            ])
            .to_owned();

        manager.exec_stmt(seed_admin).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bookings).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Properties).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users).to_owned())
            .await?;

        Ok(())
    }
}
