pub mod shared {
    pub mod application {
        pub mod errors;
    }
    pub mod infrastructure {
        pub mod account_store;
        pub mod password_hasher;
        pub mod session_store;
    }
}

pub mod modules {
    pub mod accounts {
        pub mod core {
            pub mod account;
            pub mod email;
            pub mod password;
            pub mod route;
            pub mod session;
            pub mod xsrf;
        }
        pub mod use_cases {
            pub mod xsrf_token {
                pub mod handler;
            }
            pub mod register_account {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod login {
                pub mod command;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_session;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;

    pub mod e2e {
        pub mod register_account_tests;
    }
}
