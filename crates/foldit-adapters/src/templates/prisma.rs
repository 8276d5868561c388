//! Prisma schema, client singleton, seed script and `.env` entry.

use foldit_core::domain::DbProvider;

use crate::renderer::{Rendered, Vars};

const SCHEMA: &str = "// This is your Prisma schema file,
// learn more about it in the docs: https://pris.ly/d/prisma-schema

generator client {
  provider = \"prisma-client-js\"
}

datasource db {
  provider = \"{{PROVIDER}}\"
  url      = env(\"DATABASE_URL\"){{RELATION_MODE}}
}

// Example model - remove or modify as needed
model User {
  id        String   @id @default(cuid())
  email     String   @unique
  name      String?
  createdAt DateTime @default(now())
  updatedAt DateTime @updatedAt

  @@map(\"users\")
}

// Add your models here
";

const CLIENT: &str = "import { PrismaClient } from '@prisma/client'

const globalForPrisma = globalThis as unknown as {
  prisma: PrismaClient | undefined
}

export const prisma = globalForPrisma.prisma ?? new PrismaClient()

if (process.env.NODE_ENV !== 'production') globalForPrisma.prisma = prisma

export default prisma
";

const SEED: &str = "import { PrismaClient } from '@prisma/client'

const prisma = new PrismaClient()

async function main() {
  console.log('Starting database seeding...')

  const user = await prisma.user.upsert({
    where: { email: 'admin@example.com' },
    update: {},
    create: {
      email: 'admin@example.com',
      name: 'Admin User',
    },
  })

  console.log('Created user:', user.email)

  // Add more seeding logic here
}

main()
  .catch((e) => {
    console.error('Error during seeding:', e)
    process.exit(1)
  })
  .finally(async () => {
    await prisma.$disconnect()
  })
";

pub fn schema(provider: DbProvider) -> Rendered {
    // MongoDB has no foreign keys; Prisma emulates relations.
    let relation_mode = if provider == DbProvider::Mongodb {
        "\n  relationMode = \"prisma\""
    } else {
        ""
    };
    Vars::new()
        .with("PROVIDER", provider.as_str())
        .with("RELATION_MODE", relation_mode)
        .render(SCHEMA)
}

pub fn client() -> String {
    CLIENT.to_owned()
}

pub fn seed() -> String {
    SEED.to_owned()
}

pub fn database_env(provider: DbProvider) -> String {
    format!("DATABASE_URL=\"{}\"\n", provider.example_url())
}
