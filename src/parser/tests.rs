use super::parse;
use crate::model::IndexType;

/// A realistic mysqldump fragment: session setup, DROP statements, both
/// comment styles and two related tables.
fn sample_ddl() -> &'static str {
    r#"-- MySQL dump fragment
SET NAMES utf8mb4;

DROP TABLE IF EXISTS `users`;
CREATE TABLE `users` (
  `id` bigint unsigned NOT NULL AUTO_INCREMENT COMMENT 'user id',
  `email` varchar(100) NOT NULL COMMENT 'login email',
  `name` varchar(50) DEFAULT NULL COMMENT 'display name',
  `status` tinyint NOT NULL DEFAULT '1',
  `created_at` datetime NOT NULL DEFAULT CURRENT_TIMESTAMP,
  PRIMARY KEY (`id`),
  UNIQUE KEY `uk_email` (`email`),
  KEY `idx_status` (`status`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COMMENT='user accounts';

/* order data */
CREATE TABLE `orders` (
  `id` bigint unsigned NOT NULL AUTO_INCREMENT,
  `user_id` bigint unsigned NOT NULL COMMENT 'owner',
  `amount` decimal(10,2) NOT NULL DEFAULT '0.00' COMMENT 'total amount',
  `status` varchar(20) NOT NULL DEFAULT 'pending',
  PRIMARY KEY (`id`),
  KEY `idx_user` (`user_id`),
  CONSTRAINT `fk_orders_user` FOREIGN KEY (`user_id`) REFERENCES `users` (`id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COMMENT='orders';
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sample_schema() {
        let schema = parse(sample_ddl());

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.table_names(), vec!["users", "orders"]);

        let users = schema.table("users").unwrap();
        assert_eq!(users.columns.len(), 5);
        assert_eq!(users.primary_keys, vec!["id"]);
        assert_eq!(users.indexes.len(), 3);
        assert_eq!(users.indexes[0].index_type, IndexType::Primary);
        assert_eq!(users.indexes[1].name, "uk_email");
        assert_eq!(users.indexes[1].index_type, IndexType::Unique);
        assert_eq!(users.indexes[2].name, "idx_status");
        assert_eq!(users.indexes[2].index_type, IndexType::Index);
        assert_eq!(users.engine.as_deref(), Some("InnoDB"));
        assert_eq!(users.charset.as_deref(), Some("utf8mb4"));
        assert_eq!(users.comment.as_deref(), Some("user accounts"));

        let id = users.column("id").unwrap();
        assert!(id.auto_increment);
        assert!(!id.nullable);
        assert_eq!(id.comment.as_deref(), Some("user id"));

        let created = users.column("created_at").unwrap();
        assert_eq!(created.default.as_deref(), Some("CURRENT_TIMESTAMP"));
    }

    #[test]
    fn test_parse_sample_foreign_key() {
        let schema = parse(sample_ddl());
        let orders = schema.table("orders").unwrap();

        assert_eq!(orders.foreign_keys.len(), 1);
        let fk = &orders.foreign_keys[0];
        assert_eq!(fk.name, "fk_orders_user");
        assert_eq!(fk.columns, vec!["user_id"]);
        assert_eq!(fk.ref_table, "users");
        assert_eq!(fk.ref_columns, vec!["id"]);

        let amount = orders.column("amount").unwrap();
        assert_eq!(amount.data_type, "decimal");
        assert_eq!(amount.length.as_deref(), Some("10,2"));
        assert_eq!(amount.default.as_deref(), Some("0.00"));
    }

    #[test]
    fn test_comment_lookalikes_inside_quotes() {
        let schema = parse(
            "CREATE TABLE t (\n  sep varchar(4) DEFAULT '--' COMMENT 'list separator'\n);",
        );
        let sep = schema.table("t").unwrap().column("sep").unwrap();
        assert_eq!(sep.default.as_deref(), Some("--"));
        assert_eq!(sep.comment.as_deref(), Some("list separator"));
    }

    #[test]
    fn test_duplicate_table_keeps_position_takes_last_definition() {
        let ddl = "CREATE TABLE a (x int);\nCREATE TABLE b (y int);\nCREATE TABLE a (x int, z int);";
        let schema = parse(ddl);

        assert_eq!(schema.table_names(), vec!["a", "b"]);
        assert_eq!(schema.table("a").unwrap().columns.len(), 2);
    }

    #[test]
    fn test_broken_statement_dropped_rest_survives() {
        let ddl = "CREATE TABLE broken (id int;\nCREATE TABLE ok (id int);";
        let schema = parse(ddl);

        assert_eq!(schema.len(), 1);
        assert!(schema.contains_table("ok"));
    }

    #[test]
    fn test_missing_semicolon_drops_statement() {
        let schema = parse("CREATE TABLE no_semi (id int)");
        assert!(schema.is_empty());
    }

    #[test]
    fn test_enum_values_keep_their_commas() {
        let schema = parse("CREATE TABLE t (\n  kind enum('a','b','c') NOT NULL,\n  id int\n);");
        let table = schema.table("t").unwrap();

        assert_eq!(table.columns.len(), 2);
        let kind = table.column("kind").unwrap();
        assert_eq!(kind.data_type, "enum");
        assert_eq!(kind.length.as_deref(), Some("'a','b','c'"));
    }

    #[test]
    fn test_lowercase_keywords() {
        let ddl = "create table if not exists demo (\n  id bigint not null,\n  primary key (id)\n) engine=innodb;";
        let schema = parse(ddl);
        let demo = schema.table("demo").unwrap();

        assert_eq!(demo.primary_keys, vec!["id"]);
        assert!(!demo.column("id").unwrap().nullable);
        assert_eq!(demo.engine.as_deref(), Some("innodb"));
    }

    #[test]
    fn test_cjk_comments() {
        let ddl = "CREATE TABLE `商品` (\n  `名前` varchar(100) NOT NULL COMMENT '商品名'\n) COMMENT='商品マスタ';";
        let schema = parse(ddl);
        let table = schema.table("商品").unwrap();

        assert_eq!(table.comment.as_deref(), Some("商品マスタ"));
        assert_eq!(table.columns[0].name, "名前");
        assert_eq!(table.columns[0].comment.as_deref(), Some("商品名"));
    }

    #[test]
    fn test_no_create_statements() {
        assert!(parse("SELECT 1;\nDROP TABLE x;").is_empty());
        assert!(parse("").is_empty());
    }
}
