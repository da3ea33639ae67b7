pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod library;
    pub mod repository;
}

pub mod books {
    pub mod domain;
    pub mod dto;
    pub mod factory;
    pub mod repository;
}

pub mod catalog {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod dto;
    pub mod factory;
    pub mod seed;
}

pub mod utils {
    pub mod ddb;
    pub mod logs;
    pub mod sqlite;
}
