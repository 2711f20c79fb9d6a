pub mod venue;
pub mod event;
pub mod recurring;
pub mod team_member;
pub mod gallery;
pub mod review;
pub mod service;
pub mod setting;
pub mod contact;
pub mod question;
pub mod social;
