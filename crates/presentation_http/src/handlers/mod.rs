//! HTTP request handlers

pub mod health;
pub mod schedule;
pub mod whatsapp;
