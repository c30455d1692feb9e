pub mod auth;
pub mod certificate;
pub mod chat;
pub mod contact;
pub mod email;
pub mod experience;
pub mod project;
pub mod settings;
pub mod skill;
