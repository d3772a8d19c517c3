//! Request handlers, one module per resource.
//!
//! Every catalog handler takes a [`RequireStaff`](crate::middleware::rbac::RequireStaff)
//! extractor; only `auth::login` is public.

pub mod account;
pub mod action_type;
pub mod affect_on_value;
pub mod auth;
pub mod author;
pub mod composition;
pub mod composition_type;
pub mod country;
pub mod decision;
pub mod decision_evaluation;
pub mod decision_type;
pub mod deletion;
pub mod episode;
pub mod event;
pub mod event_sequence;
pub mod fact;
pub mod fact_relation;
pub mod fact_type;
pub mod global_actor;
pub mod hero;
pub mod hero_action;
pub mod hero_value;
pub mod participation;
pub mod place;
pub mod role_type;
pub mod saga;
pub mod schema;
pub mod stamp_status;
pub mod universe;
pub mod upload;
pub mod user;
pub mod user_stamp;
pub mod value_dimension;
