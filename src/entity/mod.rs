pub mod admin_logs;
pub mod admin_users;
pub mod collections;
pub mod contact_messages;
pub mod faq_items;
pub mod hero_slides;
pub mod product_collections;
pub mod product_images;
pub mod product_variants;
pub mod products;
pub mod store_settings;
pub mod user_documents;
pub mod users;

pub use admin_logs::Entity as AdminLogs;
pub use admin_users::Entity as AdminUsers;
pub use collections::Entity as Collections;
pub use contact_messages::Entity as ContactMessages;
pub use faq_items::Entity as FaqItems;
pub use hero_slides::Entity as HeroSlides;
pub use product_collections::Entity as ProductCollections;
pub use product_images::Entity as ProductImages;
pub use product_variants::Entity as ProductVariants;
pub use products::Entity as Products;
pub use store_settings::Entity as StoreSettings;
pub use user_documents::Entity as UserDocuments;
pub use users::Entity as Users;
