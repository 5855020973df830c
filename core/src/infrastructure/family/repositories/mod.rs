pub mod family_repository;
