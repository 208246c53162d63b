pub mod application {
    pub mod access {
        pub mod authenticate;
    }
    pub mod receipt {
        pub mod process;
    }
}

pub mod domain {
    pub mod logger;
    pub mod access {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod authenticate;
        }
    }
    pub mod receipt {
        pub mod errors;
        pub mod model;
        pub mod normalizer;
        pub mod services;
        pub mod submission;
        pub mod value_objects;
        pub mod use_cases {
            pub mod process;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
