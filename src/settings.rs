use crate::config::GreeterConfig;

/// The recognized configuration keys, resolved once at startup.
///
/// Every value is carried as a string; a provided value is kept verbatim
/// and an absent key resolves to its documented default:
///
/// | key                                          | default                  |
/// |----------------------------------------------|--------------------------|
/// | `application.greeting.message`               | `hello from default`     |
/// | `application.number.value`                   | `0`                      |
/// | `vcap.services.my-custom-service.username`   | `No VCAP Settings found` |
/// | `vcap.application.name`                      | `local_app`              |
/// | `vcap.application.space_name`                | `local_space`            |
#[derive(Debug, Clone)]
pub struct GreeterSettings {
    pub greeting_message: String,
    pub number_value: String,
    pub custom_service_username: String,
    pub application_name: String,
    pub space_name: String,
}

impl GreeterSettings {
    pub fn from_config(config: &GreeterConfig) -> Self {
        Self {
            greeting_message: config
                .get_or("application.greeting.message", "hello from default".to_string()),
            number_value: config.get_or("application.number.value", "0".to_string()),
            custom_service_username: config.get_or(
                "vcap.services.my-custom-service.username",
                "No VCAP Settings found".to_string(),
            ),
            application_name: config.get_or("vcap.application.name", "local_app".to_string()),
            space_name: config.get_or("vcap.application.space_name", "local_space".to_string()),
        }
    }
}

/// Where the server binds. `server.host` defaults to `0.0.0.0`,
/// `server.port` to `8080`.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn from_config(config: &GreeterConfig) -> Self {
        Self {
            host: config.get_or("server.host", "0.0.0.0".to_string()),
            port: config.get_or("server.port", 8080),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
