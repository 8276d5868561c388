//! NextAuth.js and BetterAuth bodies.
//!
//! Both flavors share the provider blocks, the Prisma models and the
//! adapter module; they differ in how the configuration is exported and in
//! the environment variable names.

use foldit_core::domain::{AuthFlavor, AuthOptions, AuthProvider};

use crate::renderer::{Rendered, Vars};

const NEXT_AUTH_CONFIG: &str = "import NextAuth from \"next-auth\"
import { NextAuthOptions } from \"next-auth\"
{{IMPORTS}}
export const authOptions: NextAuthOptions = {
  adapter: {{ADAPTER}},
  session: {
    strategy: \"{{SESSION}}\",
  },
  providers: [
{{PROVIDERS}}  ],
{{CALLBACKS}}}

export default NextAuth(authOptions)
";

const BETTER_AUTH_CONFIG: &str = "import NextAuth from \"next-auth\"
import type { NextAuthConfig } from \"next-auth\"
{{IMPORTS}}
const config = {
{{ADAPTER_LINE}}  session: {
    strategy: \"{{SESSION}}\",
  },
  providers: [
{{PROVIDERS}}  ],
{{CALLBACKS}}} satisfies NextAuthConfig

export const { handlers, auth, signIn, signOut } = NextAuth(config)
";

const CALLBACKS: &str = "  callbacks: {
    async session({ session, user }) {
      if (session.user) {
        session.user.id = user.id
      }
      return session
    },
    async jwt({ token, user }) {
      if (user) {
        token.id = user.id
      }
      return token
    },
  },
  pages: {
    signIn: \"/auth/signin\",
    signOut: \"/auth/signout\",
    error: \"/auth/error\",
  },
";

const OAUTH_PROVIDER: &str = "    {{IDENT}}({
      clientId: process.env.{{ID_VAR}}!,
      clientSecret: process.env.{{SECRET_VAR}}!,
    }),
";

const CREDENTIALS_PROVIDER: &str = "    {{IDENT}}({
      name: \"credentials\",
      credentials: {
        email: { label: \"Email\", type: \"email\" },
        password: { label: \"Password\", type: \"password\" }
      },
      async authorize(credentials) {
        // Look the user up and verify the password here
        return null
      }
    }),
";

const PRISMA_ADAPTER: &str = "import { PrismaAdapter } from \"@auth/prisma-adapter\"
import { prisma } from \"./prisma\"

export const adapter = PrismaAdapter(prisma)

export default adapter
";

const MODELS: &str = "// {{LIBRARY}} Models
model Account {
  id                String  @id @default(cuid())
  userId            String
  type              String
  provider          String
  providerAccountId String
  refresh_token     String? @db.Text
  access_token      String? @db.Text
  expires_at        Int?
  token_type        String?
  scope             String?
  id_token          String? @db.Text
  session_state     String?

  user User @relation(fields: [userId], references: [id], onDelete: Cascade)

  @@unique([provider, providerAccountId])
}

model Session {
  id           String   @id @default(cuid())
  sessionToken String   @unique
  userId       String
  expires      DateTime
  user         User     @relation(fields: [userId], references: [id], onDelete: Cascade)
}

model User {
  id            String    @id @default(cuid())
  name          String?
  email         String?   @unique
  emailVerified DateTime?
  image         String?
  accounts      Account[]
  sessions      Session[]
}

model VerificationToken {
  identifier String
  token      String   @unique
  expires    DateTime

  @@unique([identifier, token])
}
";

/// Import identifier for a provider, as each flavor's docs spell it.
fn provider_ident(flavor: AuthFlavor, provider: AuthProvider) -> &'static str {
    match (flavor, provider) {
        (AuthFlavor::NextAuth, AuthProvider::Github) => "GitHubProvider",
        (AuthFlavor::NextAuth, AuthProvider::Google) => "GoogleProvider",
        (AuthFlavor::NextAuth, AuthProvider::Discord) => "DiscordProvider",
        (AuthFlavor::NextAuth, AuthProvider::Credentials) => "CredentialsProvider",
        (AuthFlavor::BetterAuth, AuthProvider::Github) => "GitHub",
        (AuthFlavor::BetterAuth, AuthProvider::Google) => "Google",
        (AuthFlavor::BetterAuth, AuthProvider::Discord) => "Discord",
        (AuthFlavor::BetterAuth, AuthProvider::Credentials) => "Credentials",
    }
}

/// Client id/secret variables; `None` for credentials.
fn oauth_vars(flavor: AuthFlavor, provider: AuthProvider) -> Option<(&'static str, &'static str)> {
    match provider {
        AuthProvider::Github if flavor == AuthFlavor::NextAuth => {
            Some(("GITHUB_ID", "GITHUB_SECRET"))
        }
        AuthProvider::Github => Some(("GITHUB_CLIENT_ID", "GITHUB_CLIENT_SECRET")),
        AuthProvider::Google => Some(("GOOGLE_CLIENT_ID", "GOOGLE_CLIENT_SECRET")),
        AuthProvider::Discord => Some(("DISCORD_CLIENT_ID", "DISCORD_CLIENT_SECRET")),
        AuthProvider::Credentials => None,
    }
}

pub fn config(options: &AuthOptions) -> Rendered {
    let flavor = options.flavor;

    let mut imports = String::new();
    if options.prisma {
        imports.push_str("import { PrismaAdapter } from \"@auth/prisma-adapter\"\n");
        imports.push_str("import { prisma } from \"./prisma\"\n");
    }
    let mut providers = String::new();
    if let Some(provider) = options.provider {
        let ident = provider_ident(flavor, provider);
        imports.push_str(&format!(
            "import {ident} from \"next-auth/providers/{}\"\n",
            provider.as_str()
        ));
        let vars = Vars::new().with("IDENT", ident);
        let block = match oauth_vars(flavor, provider) {
            Some((id, secret)) => vars
                .with("ID_VAR", id)
                .with("SECRET_VAR", secret)
                .render(OAUTH_PROVIDER)?,
            None => vars.render(CREDENTIALS_PROVIDER)?,
        };
        providers.push_str(&block);
    }

    let adapter = if options.prisma {
        "PrismaAdapter(prisma)"
    } else {
        "undefined"
    };
    let adapter_line = if options.prisma {
        "  adapter: PrismaAdapter(prisma),\n"
    } else {
        ""
    };

    let template = match flavor {
        AuthFlavor::NextAuth => NEXT_AUTH_CONFIG,
        AuthFlavor::BetterAuth => BETTER_AUTH_CONFIG,
    };
    Vars::new()
        .with("IMPORTS", imports)
        .with("ADAPTER", adapter)
        .with("ADAPTER_LINE", adapter_line)
        .with("SESSION", options.session.as_str())
        .with("PROVIDERS", providers)
        .with("CALLBACKS", CALLBACKS)
        .render(template)
}

pub fn route(flavor: AuthFlavor) -> String {
    match flavor {
        AuthFlavor::NextAuth => "import { authOptions } from \"@/lib/auth\"
import NextAuth from \"next-auth\"

const handler = NextAuth(authOptions)

export { handler as GET, handler as POST }
"
        .to_owned(),
        AuthFlavor::BetterAuth => "import { handlers } from \"@/lib/auth\"

export const { GET, POST } = handlers
"
        .to_owned(),
    }
}

pub fn prisma_adapter(_flavor: AuthFlavor) -> String {
    PRISMA_ADAPTER.to_owned()
}

pub fn prisma_models(flavor: AuthFlavor) -> Rendered {
    Vars::new()
        .with("LIBRARY", flavor.display_name())
        .render(MODELS)
}

pub fn env(options: &AuthOptions) -> String {
    let mut out = match options.flavor {
        AuthFlavor::NextAuth => String::from(
            "# NextAuth.js Configuration\nNEXTAUTH_SECRET=\"your-secret-key-here\"\nNEXTAUTH_URL=\"http://localhost:3000\"\n",
        ),
        AuthFlavor::BetterAuth => String::from(
            "# BetterAuth Configuration\nAUTH_SECRET=\"your-secret-key-here\"\nAUTH_URL=\"http://localhost:3000\"\n",
        ),
    };

    if let Some(provider) = options.provider {
        let heading = match provider {
            AuthProvider::Github => "# GitHub OAuth",
            AuthProvider::Google => "# Google OAuth",
            AuthProvider::Discord => "# Discord OAuth",
            AuthProvider::Credentials => "# Credentials Provider",
        };
        out.push('\n');
        out.push_str(heading);
        out.push('\n');
        match oauth_vars(options.flavor, provider) {
            Some((id, secret)) => {
                let slug = provider.as_str();
                out.push_str(&format!("{id}=\"your-{slug}-client-id\"\n"));
                out.push_str(&format!("{secret}=\"your-{slug}-client-secret\"\n"));
            }
            None => out.push_str("# Add your own credential validation logic\n"),
        }
    }
    out
}
