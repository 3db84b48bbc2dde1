pub mod config;

pub mod shared {
    pub mod core {
        pub mod errors;
    }
    pub mod infrastructure {
        pub mod identity_gate;
    }
}

pub mod modules {
    pub mod tasks {
        pub mod core {
            pub mod model;
            pub mod ports;
        }
        pub mod adapters {
            pub mod in_memory;
        }
        pub mod inbound {
            pub mod http;
        }
        pub mod service;
    }
    pub mod time_entries {
        pub mod core {
            pub mod model;
            pub mod ports;
        }
        pub mod adapters {
            pub mod in_memory;
        }
        pub mod inbound {
            pub mod http;
        }
        pub mod service;
    }
    pub mod stats {
        pub mod engine;
        pub mod inbound {
            pub mod http;
        }
        pub mod model;
        pub mod range;
    }
}

pub mod shell;

#[cfg(test)]
pub mod test_support;
