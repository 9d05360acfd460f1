pub mod config;

pub mod domain {
    pub mod like {
        pub mod entity;
        pub mod errors;
        pub mod repository;
        pub mod subject;
        pub mod value_objects;
    }
    pub mod video {
        pub mod entity;
    }
}

pub mod application {
    pub mod likes {
        pub mod dto;
        pub mod use_case;
    }
}

pub mod infrastructure {
    pub mod database {
        pub mod pool;
    }
    pub mod repositories {
        pub mod sqlx_like_repository;
    }
}

pub mod presentation {
    pub mod http {
        pub mod errors;
        pub mod routes;
        pub mod state;
        pub mod handlers {
            pub mod health;
            pub mod likes;
        }
        pub mod middleware {
            pub mod request_id;
            pub mod user;
        }
    }
}
