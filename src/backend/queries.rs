//! GraphQL documents sent to the Keystone backend.

pub const TEAM_BY_NAME: &str = r#"
query TeamByName($name: String!) {
  teams(where: { name: { equals: $name } }, take: 1) { id name }
}"#;

pub const PLAYER_BY_EMAIL: &str = r#"
query PlayerByEmail($value: String!) {
  players(where: { email: { equals: $value } }, take: 1) {
    id firstName lastName email phoneNumber playerID jerseyNumber kitSize
  }
}"#;

pub const PLAYER_BY_PHONE: &str = r#"
query PlayerByPhone($value: String!) {
  players(where: { phoneNumber: { equals: $value } }, take: 1) {
    id firstName lastName email phoneNumber playerID jerseyNumber kitSize
  }
}"#;

pub const PLAYER_BY_PLAYER_ID: &str = r#"
query PlayerByPlayerId($value: String!) {
  players(where: { playerID: { equals: $value } }, take: 1) {
    id firstName lastName email phoneNumber playerID jerseyNumber kitSize
  }
}"#;

pub const COMPETITION_BY_NAME: &str = r#"
query CompetitionByName($name: String!) {
  competitions(where: { name: { equals: $name } }, take: 1) { id }
}"#;

pub const SEASON_BY_NAME: &str = r#"
query SeasonByName($name: String!) {
  seasons(where: { name: { equals: $name } }, take: 1) { id }
}"#;

pub const CREATE_PLAYER: &str = r#"
mutation CreatePlayer($data: PlayerCreateInput!) {
  createPlayer(data: $data) { id }
}"#;

pub const CREATE_TEAM: &str = r#"
mutation CreateTeam($data: TeamCreateInput!) {
  createTeam(data: $data) { id }
}"#;

pub const CREATE_PARTICIPATION: &str = r#"
mutation CreateParticipation($data: ParticipationCreateInput!) {
  createParticipation(data: $data) { id }
}"#;

pub const UPDATE_PLAYER: &str = r#"
mutation UpdatePlayer($id: ID!, $data: PlayerUpdateInput!) {
  updatePlayer(where: { id: $id }, data: $data) { id }
}"#;

pub const UPDATE_PARTICIPATION_VERIFIED: &str = r#"
mutation VerifyParticipation($id: ID!, $verified: Boolean!) {
  updateParticipation(where: { id: $id }, data: { isVerified: $verified }) { id }
}"#;

pub const AUTHENTICATE: &str = r#"
mutation Authenticate($email: String!, $password: String!) {
  authenticateUserWithPassword(email: $email, password: $password) {
    ... on UserAuthenticationWithPasswordSuccess { sessionToken item { id } }
    ... on UserAuthenticationWithPasswordFailure { message }
  }
}"#;

pub const ROSTERS_FOR_ADMIN: &str = r#"
query RostersForAdmin($email: String!) {
  participations(where: { teamAdmin: { email: { equals: $email } } }) {
    id name sportType tournament isVerified
    team { id name }
    players { id firstName lastName email phoneNumber playerID jerseyNumber kitSize }
  }
}"#;

pub const PARTICIPATIONS: &str = r#"
query Participations($where: ParticipationWhereInput!) {
  participations(where: $where, orderBy: { name: asc }) {
    id name sportType isVerified
    team { id name }
    teamAdmin { firstName lastName email }
    playersCount
  }
}"#;
