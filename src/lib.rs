pub mod shared {
    pub mod http {
        pub mod auth;
        pub mod error;
        pub mod payload;
    }
}

pub mod modules {
    pub mod users {
        pub mod core {
            pub mod ports;
            pub mod user;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod list_users {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_user {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_user {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_user {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod user_store_in_memory;
            }
        }
    }
}

pub mod shell;
