pub mod commands {
    pub mod register_account;
}

pub mod http;
