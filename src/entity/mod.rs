pub mod addresses;
pub mod categories;
pub mod customers;
pub mod order_items;
pub mod orders;
pub mod payments;
pub mod product_categories;
pub mod products;
pub mod reviews;
pub mod users;

pub use addresses::Entity as Addresses;
pub use categories::Entity as Categories;
pub use customers::Entity as Customers;
pub use order_items::Entity as OrderItems;
pub use orders::Entity as Orders;
pub use payments::Entity as Payments;
pub use product_categories::Entity as ProductCategories;
pub use products::Entity as Products;
pub use reviews::Entity as Reviews;
pub use users::Entity as Users;

pub use orders::OrderStatus;
pub use payments::PaymentMethod;
pub use users::UserRole;
