use diesel::{r2d2::ConnectionManager, Connection, PgConnection, RunQueryDsl};
use hotel::{configuration::{DatabaseSettings, Settings}, startup::Application, telemetry::{get_subscriber, init_subscriber}, utils::DbPool};
use once_cell::sync::Lazy;
use r2d2::Pool;
use reqwest::Response;
use serde_json::Value;
use uuid::Uuid;

static LOGGER_INSTANCE: Lazy<()> = Lazy::new(|| {
    let log_level = "info".to_string();
    let name = "hotel-test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(name, log_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(name, log_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp{
    pub host: String,
    pub port: u16,
    pub pool: DbPool,
    pub api_client: reqwest::Client,
    pub token: Option<String>
}

impl TestApp {
    // Creates an empty database, the application applies the migrations on startup
    fn create_db(settings: &DatabaseSettings) -> DbPool{
        let mut connection = PgConnection::establish(&settings.get_database_url())
                                .expect("Failed to connect to postgres database");

        let query = format!(r#"CREATE DATABASE "{}";"#, settings.name);
        diesel::sql_query(query)
            .execute(&mut connection)
            .expect("Failed to create test database");

        Pool::builder()
            .build_unchecked(ConnectionManager::<PgConnection>::new(settings.get_database_table_url()))
    }

    pub fn get_app_url(&self) -> String{
        format!("http://{}:{}", self.host, self.port)
    }

    pub async fn spawn_app() -> TestApp{
        Lazy::force(&LOGGER_INSTANCE);

        let mut settings = Settings::get().expect("Failed to read configuration");
        settings.application.port = 0;
        settings.database.name = Uuid::new_v4().to_string();

        let pool = TestApp::create_db(&settings.database);

        let application = Application::new(settings)
                            .await
                            .expect("Failed to build application");

        let host = application.host.clone();
        let port = application.port;
        tokio::task::spawn(application.server);

        TestApp{
            host,
            port,
            pool,
            api_client: reqwest::Client::new(),
            token: None
        }
    }

    /// Spawns the app with a signed up user whose access token is attached
    /// to every request made through the helpers.
    pub async fn spawn_authorized_app() -> TestApp{
        let mut app = TestApp::spawn_app().await;
        let body: Value = app.signup(&test_user("waiter@hotel.com")).await
                            .json()
                            .await
                            .unwrap();

        app.token = Some(body["data"]["token"].as_str().unwrap().to_string());
        app
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder{
        let builder = self.api_client.request(method, format!("{}{}", self.get_app_url(), path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder
        }
    }

    pub async fn get(&self, path: &str) -> Response{
        self.request(reqwest::Method::GET, path)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post(&self, path: &str, body: &Value) -> Response{
        self.request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn patch(&self, path: &str, body: &Value) -> Response{
        self.request(reqwest::Method::PATCH, path)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn put(&self, path: &str) -> Response{
        self.request(reqwest::Method::PUT, path)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete(&self, path: &str) -> Response{
        self.request(reqwest::Method::DELETE, path)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn signup(&self, body: &Value) -> Response{
        self.api_client.post(format!("{}/users/signup", self.get_app_url()))
            .json(body)
            .send()
            .await
            .expect("Failed to send request to signup endpoint")
    }

    pub async fn login(&self, email: &str, password: &str) -> Response{
        self.api_client.post(format!("{}/users/login", self.get_app_url()))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to send request to login endpoint")
    }

    // Creates a table and returns its public id
    pub async fn create_table(&self, table_number: i32) -> String{
        let response = self.post("/tables", &serde_json::json!({
            "table_number": table_number,
            "number_of_guests": 4
        })).await;
        assert_eq!(response.status().as_u16(), 201);

        data_id(response, "table_id").await
    }

    pub async fn create_reserved_table(&self, table_number: i32) -> String{
        let table_id = self.create_table(table_number).await;
        let response = self.put(&format!("/tables/reserve/{}", table_id)).await;
        assert_eq!(response.status().as_u16(), 200);

        table_id
    }

    pub async fn create_menu(&self, name: &str) -> String{
        let response = self.post("/menus", &serde_json::json!({
            "name": name,
            "category": "Dinner"
        })).await;
        assert_eq!(response.status().as_u16(), 201);

        data_id(response, "menu_id").await
    }

    pub async fn create_food(&self, menu_id: &str, name: &str, price: f64) -> String{
        let response = self.post("/foods", &serde_json::json!({
            "name": name,
            "price": price,
            "menu_id": menu_id
        })).await;
        assert_eq!(response.status().as_u16(), 201);

        data_id(response, "food_id").await
    }

    pub async fn create_order(&self, table_id: &str) -> String{
        let response = self.post("/orders", &serde_json::json!({ "table_id": table_id })).await;
        assert_eq!(response.status().as_u16(), 201);

        data_id(response, "order_id").await
    }
}

pub fn test_user(email: &str) -> Value{
    serde_json::json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": email,
        "password": "testpassword"
    })
}

pub async fn data_id(response: Response, key: &str) -> String{
    let body: Value = response.json().await.expect("Response is not json");
    body["data"][key].as_str().expect("Missing id in response").to_string()
}
