use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxContactRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxSkillRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxEducationRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxCertificateRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxHealthRepo {
    pub pool: PgPool,
}
