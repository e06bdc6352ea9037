use mongodb::{Client, Collection, Database};
use std::error::Error;

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool sized for a single admin-panel audience
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        // Extract database name from URI or use default
        let db_name = uri
            .split('/')
            .last()
            .and_then(|s| s.split('?').next())
            .unwrap_or("RuwaAdmin");

        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        let mongodb = Self { client, db };

        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates the indexes the admin read paths lean on.
    async fn ensure_indexes(&self) -> Result<(), Box<dyn Error>> {
        use mongodb::bson::doc;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        let applications = self
            .database()
            .collection::<mongodb::bson::Document>("applications");

        // applications(domain, status) - the admin list/filter query
        let domain_status_index = IndexModel::builder()
            .keys(doc! { "domain": 1, "status": 1 })
            .build();
        match applications.create_index(domain_status_index).await {
            Ok(_) => log::info!("   ✅ Index created: applications(domain, status)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        // applications(user_id) - "services applied" drill-down
        let user_index = IndexModel::builder().keys(doc! { "user_id": 1 }).build();
        match applications.create_index(user_index).await {
            Ok(_) => log::info!("   ✅ Index created: applications(user_id)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        // applications(submitted_at) - dashboard today/hourly queries
        let submitted_index = IndexModel::builder()
            .keys(doc! { "submitted_at": -1 })
            .build();
        match applications.create_index(submitted_index).await {
            Ok(_) => log::info!("   ✅ Index created: applications(submitted_at)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        // employees(employee_id) unique - human code must not repeat
        let employees = self
            .database()
            .collection::<mongodb::bson::Document>("employees");
        let employee_code_index = IndexModel::builder()
            .keys(doc! { "employee_id": 1 })
            .options(
                mongodb::options::IndexOptions::builder()
                    .unique(true)
                    .build(),
            )
            .build();
        match employees.create_index(employee_code_index).await {
            Ok(_) => log::info!("   ✅ Index created: employees(employee_id) unique"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        // admins(email) unique
        let admins = self
            .database()
            .collection::<mongodb::bson::Document>("admins");
        let admin_email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                mongodb::options::IndexOptions::builder()
                    .unique(true)
                    .build(),
            )
            .build();
        match admins.create_index(admin_email_index).await {
            Ok(_) => log::info!("   ✅ Index created: admins(email) unique"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        // messages(received_at) - newest-first listing and today count
        let messages = self
            .database()
            .collection::<mongodb::bson::Document>("messages");
        let received_index = IndexModel::builder()
            .keys(doc! { "received_at": -1 })
            .build();
        match messages.create_index(received_index).await {
            Ok(_) => log::info!("   ✅ Index created: messages(received_at)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}
