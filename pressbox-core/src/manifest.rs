//! Compose manifest rendering for the WordPress stack.
//!
//! The stack is two services: a MySQL database and the WordPress
//! application, joined by a named volume for database storage. The site
//! name scopes the volume and the host port is configurable, so a second
//! site on the same host does not collide with the first. Credentials are
//! the stock development defaults and are deliberately not configurable.

/// Well-known manifest filename inside a site directory.
pub const MANIFEST_FILE_NAME: &str = "docker-compose.yml";

/// Database service name inside the stack.
pub const DB_SERVICE: &str = "db";

/// Application service name inside the stack.
pub const WORDPRESS_SERVICE: &str = "wordpress";

/// Named volume holding the database files for a site.
pub fn volume_name(site_name: &str) -> String {
    format!("{}_db_data", site_name)
}

/// Render the compose manifest for a site.
///
/// Rendering is deterministic: identical inputs produce identical bytes.
pub fn render(site_name: &str, host_port: u16) -> String {
    let volume = volume_name(site_name);
    format!(
        r#"version: '3'
services:
  db:
    image: mysql:5.7
    volumes:
      - {volume}:/var/lib/mysql
    restart: always
    environment:
      MYSQL_ROOT_PASSWORD: wordpress
      MYSQL_DATABASE: wordpress
      MYSQL_USER: wordpress
      MYSQL_PASSWORD: wordpress

  wordpress:
    depends_on:
      - db
    image: wordpress
    ports:
      - "{host_port}:80"
    restart: always
    environment:
      WORDPRESS_DB_HOST: db:3306
      WORDPRESS_DB_USER: wordpress
      WORDPRESS_DB_PASSWORD: wordpress
      WORDPRESS_DB_NAME: wordpress
volumes:
  {volume}:
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_exact_bytes() {
        let expected = r#"version: '3'
services:
  db:
    image: mysql:5.7
    volumes:
      - demo_db_data:/var/lib/mysql
    restart: always
    environment:
      MYSQL_ROOT_PASSWORD: wordpress
      MYSQL_DATABASE: wordpress
      MYSQL_USER: wordpress
      MYSQL_PASSWORD: wordpress

  wordpress:
    depends_on:
      - db
    image: wordpress
    ports:
      - "8000:80"
    restart: always
    environment:
      WORDPRESS_DB_HOST: db:3306
      WORDPRESS_DB_USER: wordpress
      WORDPRESS_DB_PASSWORD: wordpress
      WORDPRESS_DB_NAME: wordpress
volumes:
  demo_db_data:
"#;
        assert_eq!(render("demo", 8000), expected);
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render("demo", 8000), render("demo", 8000));
    }

    #[test]
    fn test_site_name_scopes_the_volume() {
        let a = render("alpha", 8000);
        let b = render("beta", 8000);
        assert!(a.contains("alpha_db_data:/var/lib/mysql"));
        assert!(b.contains("beta_db_data:/var/lib/mysql"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_host_port_is_a_template_variable() {
        assert!(render("demo", 8080).contains("\"8080:80\""));
    }
}
