pub mod audit;
pub mod dto;
pub mod prompt;
pub mod use_case;
