pub mod shared {
    pub mod core {
        pub mod primitives;
        pub mod session;
    }
    pub mod infrastructure {
        pub mod local_store;
        pub mod media;
    }
}

pub mod modules {
    pub mod catalog {
        pub mod core {
            pub mod aggregate;
            pub mod filter;
            pub mod project;
            pub mod seed;
        }
        pub mod use_cases {
            pub mod load_catalog {
                pub mod handler;
            }
            pub mod browse_projects {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
            }
            pub mod get_project {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod record_view {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod save_project {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod translate_project {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod manage_drafts {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod local_overrides;
                pub mod project_store;
                pub mod project_store_in_memory;
                pub mod translator;
            }
        }
    }

    pub mod access {
        pub mod core {
            pub mod evolve;
            pub mod permissions;
            pub mod role;
            pub mod state;
        }
        pub mod use_cases {
            pub mod resolve_access {
                pub mod handler;
            }
            pub mod view_dashboard {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
                pub mod projection;
            }
            pub mod manage_users {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod role_directory;
                pub mod role_directory_in_memory;
            }
        }
    }
}

pub mod shell;
